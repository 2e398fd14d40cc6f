//! Init command implementation

use clap::Args;
use climate_core::{ClimateError, DEFAULT_TOBS_STATION, DEFAULT_WINDOW_DAYS};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_FILE: &str = "climate.yaml";
const ENV_FILE: &str = ".env.example";

/// Init command arguments
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Service name
    #[arg(default_value = "hawaii-climate")]
    pub name: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// SQLite database file the service reads
    #[arg(long, default_value = "Resources/hawaii.sqlite")]
    pub database: String,

    /// Write the database path literally instead of through CLIMATE_DB_PATH
    #[arg(long)]
    pub no_env: bool,

    /// Overwrite an existing configuration
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command, returning the path of the written configuration
    pub fn execute(&self) -> Result<PathBuf, ClimateError> {
        info!("Initializing climate API configuration: {}", self.name);

        let output_dir = Path::new(&self.output);
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let config_path = output_dir.join(CONFIG_FILE);
        if config_path.exists() && !self.force {
            return Err(ClimateError::Config(format!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            )));
        }

        fs::write(&config_path, self.generate_config())?;
        info!("Created: {}", config_path.display());

        if !self.no_env {
            let env_path = output_dir.join(ENV_FILE);
            fs::write(&env_path, self.generate_env_example())?;
            info!("Created: {}", env_path.display());
        }

        println!("\nClimate API configuration initialized!");
        println!("\nNext steps:");
        if !self.no_env {
            println!("  1. Copy {} to .env and point CLIMATE_DB_PATH at your database", ENV_FILE);
        } else {
            println!("  1. Check that {} exists", self.database);
        }
        println!("  2. Run: climate-api run -f {}", config_path.display());

        Ok(config_path)
    }

    fn generate_config(&self) -> String {
        let path = if self.no_env {
            yaml_quote(&self.database)
        } else {
            "\"{{ env.CLIMATE_DB_PATH }}\"".to_string()
        };

        format!(
            r#"# Climate API configuration

name: {}

database:
  path: {}

dataset:
  window_days: {}
  tobs_station: {}

server:
  port: 5000
  log_level: 1
"#,
            self.name, path, DEFAULT_WINDOW_DAYS, DEFAULT_TOBS_STATION
        )
    }

    fn generate_env_example(&self) -> String {
        format!(
            "# Climate API environment\n\nCLIMATE_DB_PATH={}\n",
            self.database
        )
    }
}

fn yaml_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use climate_parser::parse_string;

    fn command(output: &Path) -> InitCommand {
        InitCommand {
            name: "hawaii-climate".to_string(),
            output: output.to_string_lossy().into_owned(),
            database: "Resources/hawaii.sqlite".to_string(),
            no_env: false,
            force: false,
        }
    }

    #[test]
    fn test_init_writes_config_and_env() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = command(dir.path());

        let config_path = cmd.execute().unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("name: hawaii-climate"));
        assert!(content.contains("{{ env.CLIMATE_DB_PATH }}"));

        let env = fs::read_to_string(dir.path().join(ENV_FILE)).unwrap();
        assert!(env.contains("CLIMATE_DB_PATH=Resources/hawaii.sqlite"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = command(dir.path());
        cmd.execute().unwrap();

        assert!(matches!(cmd.execute(), Err(ClimateError::Config(_))));

        cmd.force = true;
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn test_literal_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = command(&dir.path().join("nested"));
        cmd.no_env = true;

        let config_path = cmd.execute().unwrap();
        assert!(!dir.path().join("nested").join(ENV_FILE).exists());

        let config = parse_string(&fs::read_to_string(config_path).unwrap()).unwrap();
        assert_eq!(config.name, "hawaii-climate");
        assert_eq!(config.database.path, "Resources/hawaii.sqlite");
        assert_eq!(config.port(), 5000);
        assert_eq!(config.dataset().window_days(), DEFAULT_WINDOW_DAYS);
        assert_eq!(config.dataset().tobs_station(), DEFAULT_TOBS_STATION);
    }
}
