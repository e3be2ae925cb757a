/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey rendering for secondary lines (elapsed times, dividers).
pub fn dim(s: &str) -> String {
    format!("{GREY}{s}{RESET}")
}

/// Placeholder shown wherever a statistic has nothing to report.
pub fn no_data() -> String {
    format!("{GREY}no data{RESET}")
}
