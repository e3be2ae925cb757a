//! Month/weekday name tables and clock formatting.

use chrono::Weekday;

/// Months the datasets cover; filter input is restricted to these.
pub const FILTER_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// 1-based month index for a filterable month name (january..june).
pub fn month_from_name(s: &str) -> Option<u32> {
    FILTER_MONTHS
        .iter()
        .position(|m| *m == s.trim().to_lowercase())
        .map(|i| i as u32 + 1)
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}

pub fn weekday_from_name(s: &str) -> Option<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// 12-hour clock rendering of an hour-of-day: 0 → "12 AM", 13 → "01 PM".
pub fn hour_12(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        1..=11 => format!("{:02} AM", hour),
        12 => "12 PM".to_string(),
        _ => format!("{:02} PM", hour - 12),
    }
}
