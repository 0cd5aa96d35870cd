use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::history::TaskHistory;
use crate::ui::messages::warning;
use crate::utils::colors::colorize_comment;
use crate::utils::formatting::secs2readable;

/// Handle the `tasks` command: the "All Tasks" view, every task with its
/// total time, then one line per session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tasks { task } = cmd {
        let store = open_store(cfg);
        let history = TaskHistory::build(&store.load_or_empty().records);

        if history.is_empty() {
            println!("No recorded tasks yet.");
            return Ok(());
        }

        if let Some(wanted) = task
            && history.sessions(wanted).is_empty()
        {
            warning(format!("No sessions found for task '{}'.", wanted));
            return Ok(());
        }

        for name in history.tasks() {
            if let Some(wanted) = task
                && wanted != name
            {
                continue;
            }

            let sessions = history.sessions(name);
            let total: u64 = sessions.iter().map(|s| s.duration_seconds).sum();

            println!("{} ({})", name, secs2readable(total, cfg.show_seconds));
            for s in sessions {
                println!(
                    "  {} {} - {} - {}",
                    s.start_date_str(),
                    s.start_time_str(),
                    secs2readable(s.duration_seconds, cfg.show_seconds),
                    colorize_comment(&s.comment)
                );
            }
        }
    }
    Ok(())
}
