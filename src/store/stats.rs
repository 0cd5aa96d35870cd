use super::SessionStore;
use crate::errors::AppResult;
use crate::models::record::SessionRecord;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;

/// Sum of `duration_seconds` per task, over the given records.
pub fn totals_by_task(records: &[SessionRecord]) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for rec in records {
        *totals.entry(rec.task_name.clone()).or_insert(0) += rec.duration_seconds;
    }
    totals
}

/// Sum of `duration_seconds` per start date, over the given records.
pub fn totals_by_date(records: &[SessionRecord]) -> BTreeMap<NaiveDate, u64> {
    let mut totals = BTreeMap::new();
    for rec in records {
        *totals.entry(rec.start_date).or_insert(0) += rec.duration_seconds;
    }
    totals
}

impl SessionStore {
    pub fn totals_by_task(&self) -> AppResult<BTreeMap<String, u64>> {
        Ok(totals_by_task(&self.load_all()?))
    }

    pub fn totals_by_date(&self) -> AppResult<BTreeMap<NaiveDate, u64>> {
        Ok(totals_by_date(&self.load_all()?))
    }
}

pub fn print_store_info(store: &SessionStore) -> AppResult<()> {
    println!();

    //
    // 1) FILE
    //
    let path = store.path();
    let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, path.display(), RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORD COUNTS
    //
    let outcome = store.load()?;
    println!(
        "{}• Sessions:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        outcome.records.len(),
        RESET
    );
    println!(
        "{}• Skipped rows:{} {}{}{}",
        CYAN, RESET, GREY, outcome.skipped, RESET
    );

    let task_count = totals_by_task(&outcome.records).len();
    println!("{}• Tasks:{} {}{}{}", CYAN, RESET, GREEN, task_count, RESET);

    //
    // 3) DATE RANGE
    //
    let first = outcome.records.iter().map(|r| r.start_date).min();
    let last = outcome.records.iter().map(|r| r.start_date).max();

    let fmt_first = first
        .map(|d| d.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last
        .map(|d| d.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE SESSIONS/DAY
    //
    if let (Some(f), Some(l)) = (first, last) {
        let days = (l - f).num_days().max(1);
        let avg = outcome.records.len() as f64 / days as f64;
        println!("{}• Average sessions/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
