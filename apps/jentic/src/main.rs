use jentic::cli::Cli;
use jentic::dispatch::run;
use jentic::logger::{initialize as LoggerInitialize, level_for_verbosity};

use std::process::ExitCode;

use clap::Parser;
use log::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Before parsing, so JENTIC_BASE_URL / JENTIC_AGENT_API_KEY from .env apply.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = LoggerInitialize(level_for_verbosity(cli.verbose)) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match dotenv {
        Ok(path) => debug!("Loaded .env from: {}", path.display()),
        Err(e) => debug!("No .env loaded: {e}"),
    }

    match run(cli).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
