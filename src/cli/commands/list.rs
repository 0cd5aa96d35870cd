use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::record::SessionRecord;
use crate::utils::date::period_bounds;
use crate::utils::table::Table;
use crate::utils::time::format_hms;

/// Handle the `list` command: flat session listing in append order,
/// optionally filtered by period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let store = open_store(cfg);
        let mut records = store.load_or_empty().records;

        if let Some(p) = period {
            let (from, to) = period_bounds(p)?;
            records.retain(|r| r.start_date >= from && r.start_date <= to);
        }

        if records.is_empty() {
            println!("No sessions found.");
            return Ok(());
        }

        print_records(&records);
        println!("{} sessions", records.len());
    }
    Ok(())
}

fn print_records(records: &[SessionRecord]) {
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.start_date_str(),
                r.start_time_str(),
                r.end_time.format("%H:%M:%S").to_string(),
                r.task_name.clone(),
                format_hms(r.duration_seconds),
                r.comment.clone(),
            ]
        })
        .collect();

    let table = Table::fitted(
        &["DATE", "START", "END", "TASK", "DURATION", "COMMENT"],
        rows,
    );
    print!("{}", table.render());
}
