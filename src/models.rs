use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SmokeError, SmokeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
	Low,
	Med,
	High,
}

impl Difficulty {
	pub fn as_str(&self) -> &'static str {
		match self {
			Difficulty::Low => "LOW",
			Difficulty::Med => "MED",
			Difficulty::High => "HIGH",
		}
	}
}

impl fmt::Display for Difficulty {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Body of `POST /create-meal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeal {
	pub meal: String,
	pub cuisine: String,
	pub price: f64,
	pub difficulty: Difficulty,
}

impl NewMeal {
	pub fn new(meal: impl Into<String>, cuisine: impl Into<String>, price: f64, difficulty: Difficulty) -> SmokeResult<Self> {
		if !price.is_finite() || price <= 0.0 {
			return Err(SmokeError::InvalidMeal(format!("invalid price: {}; price must be a positive number", price)));
		}
		Ok(Self { meal: meal.into(), cuisine: cuisine.into(), price, difficulty })
	}
}

impl fmt::Display for NewMeal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, {}, {}, {}", self.meal, self.cuisine, self.price, self.difficulty)
	}
}

/// Body of `POST /prep-combatant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantRequest {
	pub meal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardSort {
	Wins,
	WinPct,
}

impl LeaderboardSort {
	pub fn as_str(&self) -> &'static str {
		match self {
			LeaderboardSort::Wins => "wins",
			LeaderboardSort::WinPct => "win_pct",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn new_meal_serializes_with_service_field_names() {
		let meal = NewMeal::new("Pizza", "Italian", 12.99, Difficulty::Med).unwrap();
		let v = serde_json::to_value(&meal).unwrap();
		assert_eq!(v, json!({"meal": "Pizza", "cuisine": "Italian", "price": 12.99, "difficulty": "MED"}));
		assert_eq!(meal.to_string(), "Pizza, Italian, 12.99, MED");
	}

	#[test]
	fn quotes_in_names_are_escaped() {
		let meal = NewMeal::new(r#"Mom's "Famous" Pie"#, "Home", 3.5, Difficulty::Low).unwrap();
		let text = serde_json::to_string(&meal).unwrap();
		let back: NewMeal = serde_json::from_str(&text).unwrap();
		assert_eq!(back.meal, r#"Mom's "Famous" Pie"#);
	}

	#[test]
	fn rejects_non_positive_price() {
		for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
			let err = NewMeal::new("Pizza", "Italian", price, Difficulty::Med).unwrap_err();
			assert!(matches!(err, SmokeError::InvalidMeal(_)), "price {} accepted", price);
		}
	}

	#[test]
	fn difficulty_uses_upper_case_wire_names() {
		assert_eq!(serde_json::to_value(Difficulty::High).unwrap(), json!("HIGH"));
		assert_eq!(serde_json::from_value::<Difficulty>(json!("LOW")).unwrap(), Difficulty::Low);
		assert!(serde_json::from_value::<Difficulty>(json!("INVALID")).is_err());
	}
}
