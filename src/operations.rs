use reqwest::Method;

use crate::marker::{MatchMode, SuccessMarker};

const STATUS_HEALTHY: SuccessMarker = SuccessMarker::new("status", "healthy");
const DATABASE_HEALTHY: SuccessMarker = SuccessMarker::new("database_status", "healthy");
const STATUS_SUCCESS: SuccessMarker = SuccessMarker::new("status", "success");

/// Every endpoint the harness knows how to exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	HealthCheck,
	DbCheck,
	CreateMeal,
	DeleteMeal,
	GetMealById,
	GetMealByName,
	PrepCombatant,
	GetCombatants,
	ClearCombatants,
	Battle,
	Leaderboard,
	ClearMeals,
}

impl Operation {
	pub fn name(self) -> &'static str {
		match self {
			Operation::HealthCheck => "health check",
			Operation::DbCheck => "db check",
			Operation::CreateMeal => "create meal",
			Operation::DeleteMeal => "delete meal",
			Operation::GetMealById => "get meal by id",
			Operation::GetMealByName => "get meal by name",
			Operation::PrepCombatant => "prep combatant",
			Operation::GetCombatants => "get combatants",
			Operation::ClearCombatants => "clear combatants",
			Operation::Battle => "battle",
			Operation::Leaderboard => "leaderboard",
			Operation::ClearMeals => "clear meals",
		}
	}

	pub fn method(self) -> Method {
		match self {
			Operation::CreateMeal | Operation::PrepCombatant | Operation::ClearCombatants => Method::POST,
			Operation::DeleteMeal | Operation::ClearMeals => Method::DELETE,
			_ => Method::GET,
		}
	}

	/// Path relative to the base URL. Operations keyed by id or name append one more segment.
	pub fn route(self) -> &'static str {
		match self {
			Operation::HealthCheck => "/health",
			Operation::DbCheck => "/db-check",
			Operation::CreateMeal => "/create-meal",
			Operation::DeleteMeal => "/delete-meal",
			Operation::GetMealById => "/get-meal-by-id",
			Operation::GetMealByName => "/get-meal-by-name",
			Operation::PrepCombatant => "/prep-combatant",
			Operation::GetCombatants => "/get-combatants",
			Operation::ClearCombatants => "/clear-combatants",
			Operation::Battle => "/battle",
			Operation::Leaderboard => "/leaderboard",
			Operation::ClearMeals => "/clear-meals",
		}
	}

	pub fn marker(self) -> SuccessMarker {
		match self {
			Operation::HealthCheck => STATUS_HEALTHY,
			Operation::DbCheck => DATABASE_HEALTHY,
			_ => STATUS_SUCCESS,
		}
	}

	/// Whether the response body is dumped when echo mode is on.
	pub fn echoes(self) -> bool {
		matches!(
			self,
			Operation::GetMealById
				| Operation::GetMealByName
				| Operation::PrepCombatant
				| Operation::GetCombatants
				| Operation::Battle
				| Operation::Leaderboard
		)
	}
}

/// Outcome of a single request. Lives only until the next operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
	pub operation: Operation,
	pub body: String,
	pub success: bool,
}

impl OperationResult {
	pub fn evaluate(operation: Operation, body: String, mode: MatchMode) -> Self {
		let success = operation.marker().is_present(&body, mode);
		Self { operation, body, success }
	}
}
