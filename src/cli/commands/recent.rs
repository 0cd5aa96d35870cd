use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::{pad_right, secs2readable};

/// Handle the `recent` command: the quick-select suggestion list,
/// standalone.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recent { limit } = cmd {
        let store = open_store(cfg);
        let n = limit.unwrap_or(cfg.recent_tasks);
        let recent = store.recent_tasks(n)?;

        if recent.is_empty() {
            println!("No recorded tasks yet.");
            return Ok(());
        }

        header("Recent tasks");
        for activity in &recent {
            println!(
                "{} {}  {}last: {}{}",
                pad_right(&activity.task_name, 20),
                pad_right(&secs2readable(activity.total_seconds, cfg.show_seconds), 10),
                GREY,
                activity.last_start.format("%Y-%m-%d %H:%M:%S"),
                RESET
            );
            if !activity.last_comment.is_empty() {
                println!("    {}↪ {}{}", GREY, activity.last_comment, RESET);
            }
        }
    }
    Ok(())
}
