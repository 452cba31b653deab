use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "meal_max_smoke")]
#[command(about = "Smoke test for the meal max service endpoints", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
	/// Pretty-print response bodies of data-returning endpoints
	#[arg(long)]
	pub echo_json: bool,
}
