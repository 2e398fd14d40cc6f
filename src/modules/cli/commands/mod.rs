//! CLI commands

mod completion;
mod init;
mod routes;
mod run;

pub use completion::CompletionCommand;
pub use init::InitCommand;
pub use routes::RoutesCommand;
pub use run::RunCommand;

use clap::{Parser, Subcommand};
use tracing::Level;

/// climate-api - read-only JSON API over a station climate dataset
#[derive(Parser, Debug)]
#[command(name = "climate-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    ///
    /// This is a *global* option so it can be specified after subcommands,
    /// e.g. `climate-api run -f climate.yaml`.
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        default_value = "climate.yaml"
    )]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server
    Run(RunCommand),

    /// Write a starter configuration
    Init(InitCommand),

    /// Print the served routes
    Routes(RoutesCommand),

    /// Generate shell completions
    #[command(hide = true)]
    Completion(CompletionCommand),
}

impl Cli {
    /// Effective log level: `--verbose` wins, otherwise the configured
    /// level (0=DEBUG, 1=INFO, 2=WARN, 3=ERROR)
    pub fn log_level(&self, configured: u8) -> Level {
        if self.verbose {
            return Level::DEBUG;
        }
        match configured {
            0 => Level::DEBUG,
            1 => Level::INFO,
            2 => Level::WARN,
            _ => Level::ERROR,
        }
    }
}
