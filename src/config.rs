use crate::errors::{SmokeError, SmokeResult};
use crate::marker::MatchMode;

/// Where the service listens when nothing overrides it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Run settings. Fixed once the runner is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeConfig {
	pub base_url: String,
	pub echo_json: bool,
	pub match_mode: MatchMode,
}

impl Default for SmokeConfig {
	fn default() -> Self {
		Self::new(DEFAULT_BASE_URL)
	}
}

impl SmokeConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url: String = base_url.into();
		Self {
			base_url: base_url.trim().trim_end_matches('/').to_string(),
			echo_json: false,
			match_mode: MatchMode::default(),
		}
	}

	pub fn with_echo_json(mut self, echo_json: bool) -> Self {
		self.echo_json = echo_json;
		self
	}

	pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
		self.match_mode = match_mode;
		self
	}

	/// Reads `SMOKE_BASE_URL` and `SMOKE_MATCH_MODE`; the echo flag comes from the command line.
	pub fn from_env(echo_json: bool) -> SmokeResult<Self> {
		let base_url = std::env::var("SMOKE_BASE_URL")
			.ok()
			.filter(|v| !v.trim().is_empty())
			.unwrap_or_else(|| DEFAULT_BASE_URL.into());
		let match_mode = match std::env::var("SMOKE_MATCH_MODE") {
			Ok(v) if !v.trim().is_empty() => v.parse()?,
			_ => MatchMode::default(),
		};
		let config = Self::new(base_url).with_echo_json(echo_json).with_match_mode(match_mode);
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> SmokeResult<()> {
		let url = reqwest::Url::parse(&self.base_url)
			.map_err(|e| SmokeError::Config(format!("invalid base url '{}': {}", self.base_url, e)))?;
		if !matches!(url.scheme(), "http" | "https") {
			return Err(SmokeError::Config(format!("base url '{}' must use http or https", self.base_url)));
		}
		Ok(())
	}
}
