pub mod cli;
pub mod config;
pub mod errors;
pub mod marker;
pub mod models;
pub mod operations;
pub mod report;
pub mod runner;
pub mod suite;

pub use config::SmokeConfig;
pub use errors::{SmokeError, SmokeResult};
pub use runner::SmokeRunner;
pub use suite::run_default_suite;
