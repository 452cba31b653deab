use std::fmt;
use std::str::FromStr;

use crate::errors::SmokeError;

/// How a success marker is looked for in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
	/// Parse the body as JSON and compare the top-level field.
	#[default]
	Field,
	/// Look for the literal `"field": "value"` text anywhere in the body.
	Substring,
}

impl FromStr for MatchMode {
	type Err = SmokeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"field" | "json" => Ok(MatchMode::Field),
			"substring" | "grep" => Ok(MatchMode::Substring),
			other => Err(SmokeError::Config(format!("unknown match mode '{}'; expected 'field' or 'substring'", other))),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessMarker {
	pub field: &'static str,
	pub value: &'static str,
}

impl SuccessMarker {
	pub const fn new(field: &'static str, value: &'static str) -> Self {
		Self { field, value }
	}

	pub fn is_present(&self, body: &str, mode: MatchMode) -> bool {
		match mode {
			MatchMode::Field => self.field_matches(body),
			MatchMode::Substring => self.substring_matches(body),
		}
	}

	fn field_matches(&self, body: &str) -> bool {
		serde_json::from_str::<serde_json::Value>(body)
			.ok()
			.and_then(|v| v.get(self.field).and_then(|f| f.as_str()).map(|s| s == self.value))
			.unwrap_or(false)
	}

	fn substring_matches(&self, body: &str) -> bool {
		let spaced = format!("\"{}\": \"{}\"", self.field, self.value);
		let compact = format!("\"{}\":\"{}\"", self.field, self.value);
		body.contains(&spaced) || body.contains(&compact)
	}
}

impl fmt::Display for SuccessMarker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} = {}", self.field, self.value)
	}
}
