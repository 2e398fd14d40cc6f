//! Climate API CLI
//!
//! Command-line interface for the read-only climate dataset API.

use clap::Parser;
use climate_cli::{Cli, Commands};
use climate_core::ClimateError;
use climate_parser::parse_file;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

async fn run() -> Result<(), ClimateError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(ref cmd) => {
            // The configured log level is only known once the file is parsed
            let config = parse_file(&cli.config)?;
            init_logging(cli.log_level(config.log_level()));
            cmd.execute(config, &cli.config).await?;
        }
        Commands::Init(ref cmd) => {
            init_logging(cli.log_level(1));
            cmd.execute()?;
        }
        Commands::Routes(ref cmd) => {
            cmd.execute();
        }
        Commands::Completion(ref cmd) => {
            cmd.execute();
        }
    }

    Ok(())
}
