use clap::Parser;
use dotenvy::dotenv;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meal_max_smoke::cli::Cli;
use meal_max_smoke::{run_default_suite, SmokeConfig, SmokeRunner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	// Narration owns stdout; diagnostics go to stderr.
	let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::new(env_filter))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init()
		.ok();

	dotenv().ok();
	let config = SmokeConfig::from_env(cli.echo_json)?;
	let mut runner = SmokeRunner::new(config)?;

	if let Err(e) = run_default_suite(&mut runner).await {
		error!(operation = e.operation().unwrap_or("setup"), "smoke run aborted");
		return Err(e.into());
	}
	Ok(())
}
