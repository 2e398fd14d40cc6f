//! Run command implementation

use clap::Args;
use climate_core::{ClimateError, ServiceConfig};
use climate_runtime::Runtime;
use tracing::info;

/// Run command arguments
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Override server port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl RunCommand {
    /// Execute the run command with an already parsed configuration
    pub async fn execute(&self, config: ServiceConfig, config_path: &str) -> Result<(), ClimateError> {
        info!("Loaded configuration from: {}", config_path);

        let runtime = Runtime::with_port_override(config, self.port).await?;
        runtime.run().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_args() {
        let cmd = RunCommand { port: Some(5001) };
        assert_eq!(cmd.port, Some(5001));
    }

    #[tokio::test]
    async fn test_run_fails_without_database() {
        let cmd = RunCommand { port: None };
        let config = ServiceConfig::new("test", "/nonexistent/hawaii.sqlite");
        let result = cmd.execute(config, "climate.yaml").await;
        assert!(matches!(result, Err(ClimateError::Database(_))));
    }
}
