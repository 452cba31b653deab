use std::io::{self, Write};

use crate::operations::Operation;

pub const SUCCESS_PREFIX: &str = "[ok] ";
pub const FAILURE_PREFIX: &str = "[FAIL] ";
pub const ALL_PASSED: &str = "All smoke tests passed successfully!";

/// Human-readable narration of a run: one progress line before each request,
/// one outcome line after it, and optional body dumps.
pub struct Narrator<W: Write> {
	out: W,
}

impl<W: Write> Narrator<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	pub fn started(&mut self, op: Operation, subject: Option<&str>) -> io::Result<()> {
		writeln!(self.out, "{}", start_line(op, subject.unwrap_or_default()))
	}

	pub fn succeeded(&mut self, op: Operation, subject: Option<&str>) -> io::Result<()> {
		writeln!(self.out, "{}{}", SUCCESS_PREFIX, success_line(op, subject.unwrap_or_default()))
	}

	pub fn failed(&mut self, op: Operation, subject: Option<&str>) -> io::Result<()> {
		writeln!(self.out, "{}{}", FAILURE_PREFIX, failure_line(op, subject.unwrap_or_default()))
	}

	pub fn echo(&mut self, body: &str) -> io::Result<()> {
		writeln!(self.out, "{}", pretty(body))
	}

	pub fn finished(&mut self) -> io::Result<()> {
		writeln!(self.out, "{}", ALL_PASSED)?;
		self.out.flush()
	}

	pub fn into_inner(self) -> W {
		self.out
	}
}

/// Pretty-prints a JSON body; anything that does not parse is returned as-is.
pub fn pretty(body: &str) -> String {
	match serde_json::from_str::<serde_json::Value>(body) {
		Ok(v) => serde_json::to_string_pretty(&v).unwrap_or_else(|_| body.to_string()),
		Err(_) => body.to_string(),
	}
}

fn start_line(op: Operation, s: &str) -> String {
	match op {
		Operation::HealthCheck => "Checking health status...".into(),
		Operation::DbCheck => "Checking database connection...".into(),
		Operation::CreateMeal => format!("Adding meal ({}) to the catalog...", s),
		Operation::DeleteMeal => format!("Deleting meal by ID ({})...", s),
		Operation::GetMealById => format!("Getting meal by ID ({})...", s),
		Operation::GetMealByName => format!("Getting meal by name ({})...", s),
		Operation::PrepCombatant => format!("Preparing combatant: {}...", s),
		Operation::GetCombatants => "Retrieving current combatants...".into(),
		Operation::ClearCombatants => "Clearing combatants...".into(),
		Operation::Battle => "Starting battle...".into(),
		Operation::Leaderboard if s.is_empty() => "Getting leaderboard...".into(),
		Operation::Leaderboard => format!("Getting leaderboard sorted by {}...", s),
		Operation::ClearMeals => "Clearing the meal catalog...".into(),
	}
}

fn success_line(op: Operation, s: &str) -> String {
	match op {
		Operation::HealthCheck => "Service is healthy.".into(),
		Operation::DbCheck => "Database connection is healthy.".into(),
		Operation::CreateMeal => format!("Meal added successfully ({}).", s),
		Operation::DeleteMeal => format!("Meal deleted successfully by ID ({}).", s),
		Operation::GetMealById => format!("Meal retrieved successfully by ID ({}).", s),
		Operation::GetMealByName => format!("Meal retrieved successfully by name ({}).", s),
		Operation::PrepCombatant => format!("Combatant prepared successfully: {}.", s),
		Operation::GetCombatants => "Combatants retrieved successfully.".into(),
		Operation::ClearCombatants => "Combatants cleared successfully.".into(),
		Operation::Battle => "Battle completed successfully.".into(),
		Operation::Leaderboard => "Leaderboard retrieved successfully.".into(),
		Operation::ClearMeals => "Meals cleared successfully.".into(),
	}
}

fn failure_line(op: Operation, s: &str) -> String {
	match op {
		Operation::HealthCheck => "Health check failed.".into(),
		Operation::DbCheck => "Database check failed.".into(),
		Operation::CreateMeal => format!("Failed to add meal ({}).", s),
		Operation::DeleteMeal => format!("Failed to delete meal by ID ({}).", s),
		Operation::GetMealById => format!("Failed to get meal by ID ({}).", s),
		Operation::GetMealByName => format!("Failed to get meal by name ({}).", s),
		Operation::PrepCombatant => format!("Failed to prepare combatant: {}.", s),
		Operation::GetCombatants => "Failed to retrieve combatants.".into(),
		Operation::ClearCombatants => "Failed to clear combatants.".into(),
		Operation::Battle => "Battle failed.".into(),
		Operation::Leaderboard => "Failed to get leaderboard.".into(),
		Operation::ClearMeals => "Failed to clear meals.".into(),
	}
}
