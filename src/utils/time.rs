//! Time utilities: parsing HH:MM:SS, elapsed formatting, etc.

use chrono::{Local, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S").ok()
}

/// Current local instant, second precision is all the timer needs.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// "HH:MM:SS" readout for the live timer display.
pub fn format_hms(total_secs: u64) -> String {
    let hrs = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hrs, mins, secs)
}
