//! Month and weekday filters selected at the prompt.
//! `All` means no constraint on that dimension; the two filters are
//! independent and conjunctive.

use crate::utils::date;
use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based index among january..june.
    Month(u32),
}

impl MonthFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(Self::All);
        }
        date::month_from_name(&s).map(Self::Month)
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            MonthFilter::All => "all months".to_string(),
            MonthFilter::Month(m) => date::month_name(*m).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(Self::All);
        }
        date::weekday_from_name(&s).map(Self::Day)
    }

    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == weekday,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DayFilter::All => "all days".to_string(),
            DayFilter::Day(d) => date::weekday_name(*d).to_string(),
        }
    }
}
