use chrono::{NaiveDate, NaiveDateTime};
use tasktimer::models::record::SessionRecord;
use tasktimer::store::SessionStore;
use tempfile::tempdir;

fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn record(start: NaiveDateTime, secs: u64, task: &str, comment: &str) -> SessionRecord {
    SessionRecord::new(start, secs, task.to_string(), comment.to_string())
}

#[test]
fn absent_store_is_an_empty_history() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("missing.csv"));

    let outcome = store.load().unwrap();
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.skipped, 0);
}

#[test]
fn round_trip_preserves_append_order_and_fields() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("log.csv"));

    let first = record(instant(2024, 1, 1, 9, 0, 0), 1800, "writing", "draft");
    let second = record(instant(2024, 1, 1, 11, 0, 0), 60, "email", "");
    let third = record(instant(2024, 1, 2, 8, 30, 0), 0, "writing", "false start");

    store.append(&first).unwrap();
    store.append(&second).unwrap();
    store.append(&third).unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded, vec![first, second, third]);
}

#[test]
fn fields_with_commas_quotes_and_newlines_survive() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("log.csv"));

    let rec = record(
        instant(2024, 3, 5, 10, 0, 0),
        120,
        "review, chapter 2",
        "said \"done\"\nfinally",
    );
    store.append(&rec).unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded, vec![rec]);
}

#[test]
fn legacy_five_field_rows_load_with_derived_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.csv");
    std::fs::write(&path, "2024-01-01,09:00:00,writing,old format,1800\n").unwrap();

    let store = SessionStore::new(&path);
    let loaded = store.load_all().unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].task_name, "writing");
    assert_eq!(loaded[0].duration_seconds, 1800);
    assert_eq!(loaded[0].end_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(loaded[0].end_time.to_string(), "09:30:00");
}

#[test]
fn malformed_rows_are_skipped_without_losing_neighbors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.csv");
    let content = "\
2024-01-01,09:00:00,writing,legacy ok,600
only,three,fields
2024-01-02,10:00:00,2024-01-02,10:05:00,email,bad duration,abc
2024-01-03,08:00:00,2024-01-03,08:20:00,email,ok,1200
2024-01-04,08:00:00,2024-01-04,08:20:00,,empty task,1200
";
    std::fs::write(&path, content).unwrap();

    let store = SessionStore::new(&path);
    let outcome = store.load().unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.skipped, 3);
    assert_eq!(outcome.records[0].task_name, "writing");
    assert_eq!(outcome.records[1].task_name, "email");
}

#[test]
fn rename_rewrites_every_matching_row_and_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.csv");
    let store = SessionStore::new(&path);

    store
        .append(&record(instant(2024, 1, 1, 9, 0, 0), 100, "writing", "a"))
        .unwrap();
    store
        .append(&record(instant(2024, 1, 1, 10, 0, 0), 200, "email", "b"))
        .unwrap();
    store
        .append(&record(instant(2024, 1, 2, 9, 0, 0), 300, "writing", "c"))
        .unwrap();

    assert_eq!(store.rename_task("writing", "docs").unwrap(), 2);

    let after_first = std::fs::read_to_string(&path).unwrap();
    let loaded = store.load_all().unwrap();
    assert!(loaded.iter().all(|r| r.task_name != "writing"));
    assert_eq!(
        loaded
            .iter()
            .filter(|r| r.task_name == "docs")
            .count(),
        2
    );

    // applying the same rename again changes nothing
    assert_eq!(store.rename_task("writing", "docs").unwrap(), 0);
    let after_second = std::fs::read_to_string(&path).unwrap();
    assert_eq!(after_first, after_second);
}

#[test]
fn rename_with_empty_new_name_is_a_noop() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.csv");
    let store = SessionStore::new(&path);

    store
        .append(&record(instant(2024, 1, 1, 9, 0, 0), 100, "writing", ""))
        .unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    assert_eq!(store.rename_task("writing", "").unwrap(), 0);

    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn rename_touches_legacy_rows_and_passes_unknown_rows_through() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.csv");
    let content = "\
2024-01-01,09:00:00,writing,legacy,600
mystery,row,of,unknown,width,entirely
2024-01-02,10:00:00,2024-01-02,10:10:00,writing,canonical,600
";
    std::fs::write(&path, content).unwrap();

    let store = SessionStore::new(&path);
    assert_eq!(store.rename_task("writing", "docs").unwrap(), 2);

    let after = std::fs::read_to_string(&path).unwrap();
    assert!(after.contains("mystery,row,of,unknown,width,entirely"));
    assert!(!after.contains("writing"));
    assert_eq!(after.matches("docs").count(), 2);
}

#[test]
fn recent_tasks_orders_by_latest_start_with_name_tiebreak() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("log.csv"));

    store
        .append(&record(instant(2024, 1, 1, 9, 0, 0), 60, "alpha", ""))
        .unwrap();
    store
        .append(&record(instant(2024, 1, 3, 9, 0, 0), 60, "beta", ""))
        .unwrap();
    // same latest start as beta: name breaks the tie
    store
        .append(&record(instant(2024, 1, 3, 9, 0, 0), 60, "aardvark", ""))
        .unwrap();

    let recent = store.recent_tasks(10).unwrap();
    let names: Vec<&str> = recent.iter().map(|a| a.task_name.as_str()).collect();
    assert_eq!(names, vec!["aardvark", "beta", "alpha"]);

    // repeated calls against an unchanged store are stable
    let again = store.recent_tasks(10).unwrap();
    let names_again: Vec<&str> = again.iter().map(|a| a.task_name.as_str()).collect();
    assert_eq!(names, names_again);

    // limit is honored
    assert_eq!(store.recent_tasks(2).unwrap().len(), 2);
}

#[test]
fn recent_tasks_carries_totals_and_last_comment() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("log.csv"));

    store
        .append(&record(instant(2024, 1, 1, 9, 0, 0), 300, "writing", "first"))
        .unwrap();
    store
        .append(&record(instant(2024, 1, 2, 9, 0, 0), 900, "writing", "second"))
        .unwrap();

    let recent = store.recent_tasks(1).unwrap();
    assert_eq!(recent[0].total_seconds, 1200);
    assert_eq!(recent[0].last_comment, "second");
    assert_eq!(recent[0].last_start, instant(2024, 1, 2, 9, 0, 0));
}

#[test]
fn totals_reflect_a_single_half_hour_session() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("log.csv"));

    store
        .append(&record(instant(2024, 1, 1, 9, 0, 0), 1800, "writing", "draft"))
        .unwrap();

    let by_date = store.totals_by_date().unwrap();
    assert_eq!(
        by_date[&NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()],
        1800
    );

    let by_task = store.totals_by_task().unwrap();
    assert_eq!(by_task["writing"], 1800);
}

#[test]
fn totals_by_task_sums_across_dates() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("log.csv"));

    store
        .append(&record(instant(2024, 1, 1, 9, 0, 0), 100, "writing", ""))
        .unwrap();
    store
        .append(&record(instant(2024, 2, 1, 9, 0, 0), 250, "writing", ""))
        .unwrap();
    store
        .append(&record(instant(2024, 2, 1, 10, 0, 0), 50, "email", ""))
        .unwrap();

    let by_task = store.totals_by_task().unwrap();
    assert_eq!(by_task["writing"], 350);
    assert_eq!(by_task["email"], 50);
}
