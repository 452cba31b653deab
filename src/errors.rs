use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmokeError {
	#[error("{operation} failed: request did not complete: {source}")]
	Transport {
		operation: &'static str,
		#[source]
		source: reqwest::Error,
	},
	#[error("{operation} failed: response is missing success marker `{marker}`")]
	MarkerMissing {
		operation: &'static str,
		marker: String,
	},
	#[error("invalid meal: {0}")]
	InvalidMeal(String),
	#[error("configuration error: {0}")]
	Config(String),
	#[error(transparent)]
	Encode(#[from] serde_json::Error),
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl SmokeError {
	/// Name of the operation that failed, when the error came from a request.
	pub fn operation(&self) -> Option<&'static str> {
		match self {
			SmokeError::Transport { operation, .. } | SmokeError::MarkerMissing { operation, .. } => Some(*operation),
			_ => None,
		}
	}
}

pub type SmokeResult<T> = Result<T, SmokeError>;
