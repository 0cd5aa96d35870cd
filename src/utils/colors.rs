/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Dim rendering for optional free-text fields (comments); empty values
/// stay visually out of the way.
pub fn colorize_comment(value: &str) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        format!("{GREY}{value}{RESET}")
    }
}
