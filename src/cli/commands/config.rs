use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No config file at {}, defaults are in effect (run 'tasktimer init').",
                    path.display()
                ));
                return Ok(());
            }

            let content = fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Config>(&content) {
                Ok(_) => success(format!("Config file OK: {}", path.display())),
                Err(e) => {
                    return Err(AppError::Config(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )));
                }
            }
        }
    }
    Ok(())
}
