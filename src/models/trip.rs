use crate::models::time_of_day::TimeOfDay;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One bikeshare trip record, with the time fields derived from the start
/// timestamp fixed at construction.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    month: u32,
    weekday: Weekday,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        duration_secs: f64,
        start_station: String,
        end_station: String,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            month: start_time.month(),
            weekday: start_time.weekday(),
            start_time,
            end_time,
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn period(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hour())
    }

    /// The ordered (start, end) station pair identifying this trip's route.
    pub fn route(&self) -> (String, String) {
        (self.start_station.clone(), self.end_station.clone())
    }

    pub fn is_round_trip(&self) -> bool {
        self.start_station == self.end_station
    }
}
