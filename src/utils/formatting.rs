//! Formatting utilities used for CLI outputs.

use regex::Regex;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a duration in seconds as "XhYmZs", truncating fractional seconds.
pub fn format_duration(secs: f64) -> String {
    let total = secs.max(0.0).trunc() as i64;
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}

pub fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Visible width of a string on the terminal, ignoring ANSI sequences.
pub fn display_width(s: &str) -> usize {
    strip_ansi(s).width()
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}
