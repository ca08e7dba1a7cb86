mod config;
mod game_runner;
mod ui;

use clap::Parser;
use common::logger;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Path to the YAML config file, overriding the one next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::load_config(args.config.as_deref())?;

    game_runner::run_game(&config)
}
