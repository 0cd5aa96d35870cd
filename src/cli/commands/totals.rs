use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::stats::{totals_by_date, totals_by_task};
use crate::utils::date::period_bounds;
use crate::utils::formatting::secs2readable;
use crate::utils::table::Table;

/// Handle the `totals` command: summed tracked time per task (default) or
/// per start date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Totals { by_date, period } = cmd {
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

        let rows: Vec<Vec<String>> = if *by_date {
            totals_by_date(&records)
                .iter()
                .map(|(date, secs)| {
                    vec![date.to_string(), secs2readable(*secs, cfg.show_seconds)]
                })
                .collect()
        } else {
            totals_by_task(&records)
                .iter()
                .map(|(task, secs)| {
                    vec![task.clone(), secs2readable(*secs, cfg.show_seconds)]
                })
                .collect()
        };

        let headers = if *by_date {
            ["DATE", "TOTAL"]
        } else {
            ["TASK", "TOTAL"]
        };
        let table = Table::fitted(&headers, rows);
        print!("{}", table.render());
    }
    Ok(())
}
