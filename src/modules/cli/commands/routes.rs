//! Routes command implementation

use clap::Args;
use climate_runtime::ROUTES;

/// Routes command arguments
#[derive(Args, Debug)]
pub struct RoutesCommand {}

impl RoutesCommand {
    /// Print one `GET <path>` line per route
    pub fn execute(&self) {
        for line in Self::lines() {
            println!("{}", line);
        }
    }

    fn lines() -> Vec<String> {
        std::iter::once("/")
            .chain(ROUTES.iter().copied())
            .chain(std::iter::once("/health"))
            .map(|route| format!("GET {}", route))
            .collect()
    }
}
