use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `rename` command: rewrite a task name across the whole
/// history, atomically.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename { old, new } = cmd {
        if new.is_empty() {
            warning("New task name is empty, nothing to do.");
            return Ok(());
        }

        let store = open_store(cfg);
        let touched = store.rename_task(old, new)?;

        if touched == 0 {
            info(format!("No sessions found for task '{}'.", old));
        } else {
            success(format!(
                "'{}' renamed to '{}' ({} sessions).",
                old, new, touched
            ));
        }
    }
    Ok(())
}
