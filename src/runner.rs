use std::io::{self, Write};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, info, warn};

use crate::config::SmokeConfig;
use crate::errors::{SmokeError, SmokeResult};
use crate::models::{CombatantRequest, LeaderboardSort, NewMeal};
use crate::operations::{Operation, OperationResult};
use crate::report::Narrator;

// Everything outside the unreserved set is encoded inside a path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

struct Call {
	operation: Operation,
	path: String,
	body: Option<serde_json::Value>,
	subject: Option<String>,
}

impl Call {
	fn new(operation: Operation) -> Self {
		Self { operation, path: operation.route().to_string(), body: None, subject: None }
	}

	/// Appends one path segment. Empty and dot-only values would be resolved away by the URL parser.
	fn segment(mut self, value: &str) -> SmokeResult<Self> {
		if value.is_empty() || value == "." || value == ".." {
			return Err(SmokeError::InvalidMeal(format!("'{}' cannot be used as a path segment", value)));
		}
		self.path = format!("{}/{}", self.path, utf8_percent_encode(value, SEGMENT));
		self.subject = Some(value.to_string());
		Ok(self)
	}

	fn body(mut self, body: serde_json::Value, subject: String) -> Self {
		self.body = Some(body);
		self.subject = Some(subject);
		self
	}
}

/// Issues one request per operation against the configured service and narrates the outcome.
pub struct SmokeRunner<W: Write = io::Stdout> {
	client: reqwest::Client,
	config: SmokeConfig,
	narrator: Narrator<W>,
}

impl SmokeRunner<io::Stdout> {
	pub fn new(config: SmokeConfig) -> SmokeResult<Self> {
		Self::with_writer(config, io::stdout())
	}
}

impl<W: Write> SmokeRunner<W> {
	pub fn with_writer(config: SmokeConfig, out: W) -> SmokeResult<Self> {
		let client = reqwest::Client::builder()
			.user_agent(concat!("meal-max-smoke/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(|e| SmokeError::Config(format!("failed to build http client: {}", e)))?;
		Ok(Self { client, config, narrator: Narrator::new(out) })
	}

	pub fn config(&self) -> &SmokeConfig {
		&self.config
	}

	pub fn into_narrator(self) -> Narrator<W> {
		self.narrator
	}

	pub async fn check_health(&mut self) -> SmokeResult<OperationResult> {
		self.execute(Call::new(Operation::HealthCheck)).await
	}

	pub async fn check_db(&mut self) -> SmokeResult<OperationResult> {
		self.execute(Call::new(Operation::DbCheck)).await
	}

	pub async fn create_meal(&mut self, meal: &NewMeal) -> SmokeResult<OperationResult> {
		let body = serde_json::to_value(meal)?;
		self.execute(Call::new(Operation::CreateMeal).body(body, meal.to_string())).await
	}

	pub async fn delete_meal(&mut self, id: u64) -> SmokeResult<OperationResult> {
		self.execute(Call::new(Operation::DeleteMeal).segment(&id.to_string())?).await
	}

	pub async fn get_meal_by_id(&mut self, id: u64) -> SmokeResult<OperationResult> {
		self.execute(Call::new(Operation::GetMealById).segment(&id.to_string())?).await
	}

	pub async fn get_meal_by_name(&mut self, name: &str) -> SmokeResult<OperationResult> {
		self.execute(Call::new(Operation::GetMealByName).segment(name)?).await
	}

	pub async fn prep_combatant(&mut self, meal: &str) -> SmokeResult<OperationResult> {
		let body = serde_json::to_value(CombatantRequest { meal: meal.to_string() })?;
		self.execute(Call::new(Operation::PrepCombatant).body(body, meal.to_string())).await
	}

	pub async fn get_combatants(&mut self) -> SmokeResult<OperationResult> {
		self.execute(Call::new(Operation::GetCombatants)).await
	}

	pub async fn clear_combatants(&mut self) -> SmokeResult<OperationResult> {
		self.execute(Call::new(Operation::ClearCombatants)).await
	}

	pub async fn battle(&mut self) -> SmokeResult<OperationResult> {
		self.execute(Call::new(Operation::Battle)).await
	}

	pub async fn get_leaderboard(&mut self, sort: Option<LeaderboardSort>) -> SmokeResult<OperationResult> {
		let mut call = Call::new(Operation::Leaderboard);
		if let Some(sort) = sort {
			call.path = format!("{}?sort={}", call.path, sort.as_str());
			call.subject = Some(sort.as_str().to_string());
		}
		self.execute(call).await
	}

	pub async fn clear_meals(&mut self) -> SmokeResult<OperationResult> {
		self.execute(Call::new(Operation::ClearMeals)).await
	}

	pub fn finish(&mut self) -> SmokeResult<()> {
		self.narrator.finished()?;
		Ok(())
	}

	async fn execute(&mut self, call: Call) -> SmokeResult<OperationResult> {
		let op = call.operation;
		let subject = call.subject.as_deref();
		self.narrator.started(op, subject)?;

		let url = format!("{}{}", self.config.base_url, call.path);
		debug!(operation = op.name(), method = %op.method(), %url, "sending request");
		let body = match self.send(op, &url, call.body.as_ref()).await {
			Ok(body) => body,
			Err(source) => {
				warn!(operation = op.name(), %url, error = %source, "request failed");
				self.narrator.failed(op, subject)?;
				return Err(SmokeError::Transport { operation: op.name(), source });
			}
		};

		let result = OperationResult::evaluate(op, body, self.config.match_mode);
		if !result.success {
			warn!(operation = op.name(), marker = %op.marker(), body = %result.body, "success marker missing");
			self.narrator.failed(op, subject)?;
			return Err(SmokeError::MarkerMissing { operation: op.name(), marker: op.marker().to_string() });
		}

		self.narrator.succeeded(op, subject)?;
		if self.config.echo_json && op.echoes() {
			self.narrator.echo(&result.body)?;
		}
		info!(operation = op.name(), "ok");
		Ok(result)
	}

	async fn send(&self, op: Operation, url: &str, body: Option<&serde_json::Value>) -> reqwest::Result<String> {
		let mut req = self.client.request(op.method(), url);
		if let Some(body) = body {
			req = req.json(body);
		}
		let resp = req.send().await?;
		debug!(operation = op.name(), status = %resp.status(), "response received");
		resp.text().await
	}
}
