use crate::utils::date::parse_date;
use crate::utils::time::parse_time;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use csv::StringRecord;
use serde::Serialize;

/// One finalized timing session, exactly as persisted in the store.
///
/// Canonical row layout (7 fields, comma-delimited):
/// `start_date,start_time,end_date,end_time,task_name,comment,duration_seconds`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub start_date: NaiveDate, // "YYYY-MM-DD"
    pub start_time: NaiveTime, // "HH:MM:SS"
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub task_name: String,
    pub comment: String,
    pub duration_seconds: u64,
}

impl SessionRecord {
    /// Build a record from a start instant and a final duration.
    /// The end instant is derived, which keeps
    /// `duration_seconds == end - start` by construction.
    pub fn new(
        start: NaiveDateTime,
        duration_seconds: u64,
        task_name: String,
        comment: String,
    ) -> Self {
        let end = start + Duration::seconds(duration_seconds as i64);
        Self {
            start_date: start.date(),
            start_time: start.time(),
            end_date: end.date(),
            end_time: end.time(),
            task_name,
            comment,
            duration_seconds,
        }
    }

    pub fn start_instant(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    pub fn start_date_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn start_time_str(&self) -> String {
        self.start_time.format("%H:%M:%S").to_string()
    }

    /// Canonical 7-field row, ready for the csv writer.
    pub fn to_row(&self) -> [String; 7] {
        [
            self.start_date.format("%Y-%m-%d").to_string(),
            self.start_time.format("%H:%M:%S").to_string(),
            self.end_date.format("%Y-%m-%d").to_string(),
            self.end_time.format("%H:%M:%S").to_string(),
            self.task_name.clone(),
            self.comment.clone(),
            self.duration_seconds.to_string(),
        ]
    }
}

/// Parse one raw row from the store.
///
/// Recognized layouts:
/// - 7 fields: the canonical schema above
/// - 5 fields: the legacy schema `date,time,task,comment,duration`;
///   the end instant is derived as `start + duration`
///
/// Returns `None` for any other width, a non-numeric or negative duration,
/// an unparsable date/time, or an empty task name. Callers skip such rows
/// and count them for diagnostics.
pub fn parse_row(row: &StringRecord) -> Option<SessionRecord> {
    match row.len() {
        7 => parse_canonical(row),
        5 => parse_legacy(row),
        _ => None,
    }
}

fn parse_canonical(row: &StringRecord) -> Option<SessionRecord> {
    let task_name = row.get(4)?.to_string();
    if task_name.is_empty() {
        return None;
    }

    Some(SessionRecord {
        start_date: parse_date(row.get(0)?)?,
        start_time: parse_time(row.get(1)?)?,
        end_date: parse_date(row.get(2)?)?,
        end_time: parse_time(row.get(3)?)?,
        task_name,
        comment: row.get(5)?.to_string(),
        duration_seconds: row.get(6)?.parse().ok()?,
    })
}

fn parse_legacy(row: &StringRecord) -> Option<SessionRecord> {
    let task_name = row.get(2)?.to_string();
    if task_name.is_empty() {
        return None;
    }

    let start = parse_date(row.get(0)?)?.and_time(parse_time(row.get(1)?)?);
    let duration_seconds: u64 = row.get(4)?.parse().ok()?;

    Some(SessionRecord::new(
        start,
        duration_seconds,
        task_name,
        row.get(3)?.to_string(),
    ))
}
