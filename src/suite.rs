use std::io::Write;

use tracing::info;

use crate::errors::SmokeResult;
use crate::models::{Difficulty, NewMeal};
use crate::runner::SmokeRunner;

/// Meal whose id the fixed sequence fetches and finally deletes.
pub const SAMPLE_MEAL_ID: u64 = 1;

pub fn sample_meals() -> SmokeResult<[NewMeal; 2]> {
	Ok([
		NewMeal::new("Pizza", "Italian", 12.99, Difficulty::Med)?,
		NewMeal::new("Sushi", "Japanese", 15.99, Difficulty::High)?,
	])
}

/// Runs the fixed check sequence, stopping at the first failing step.
pub async fn run_default_suite<W: Write>(runner: &mut SmokeRunner<W>) -> SmokeResult<()> {
	info!(base_url = %runner.config().base_url, "running smoke suite");
	let meals = sample_meals()?;

	runner.check_health().await?;
	runner.check_db().await?;

	for meal in &meals {
		runner.create_meal(meal).await?;
	}
	runner.get_meal_by_id(SAMPLE_MEAL_ID).await?;

	for meal in &meals {
		runner.prep_combatant(&meal.meal).await?;
	}
	runner.battle().await?;
	runner.get_leaderboard(None).await?;

	runner.delete_meal(SAMPLE_MEAL_ID).await?;

	runner.finish()
}
