//! Formatting utilities used for CLI and export outputs.

use crate::utils::time::format_hms;

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Human-readable tracked time.
///
/// - `show_seconds = false`: whole minutes ("45 min")
/// - `show_seconds = true`: full "HH:MM:SS"
pub fn secs2readable(secs: u64, show_seconds: bool) -> String {
    if show_seconds {
        format_hms(secs)
    } else {
        format!("{} min", secs / 60)
    }
}
