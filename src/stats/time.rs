//! Most frequent times of travel.

use crate::data::table::TripTable;
use crate::models::time_of_day::TimeOfDay;
use crate::models::trip::Trip;
use crate::stats::mode;
use chrono::Weekday;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub busiest_month: Option<u32>,
    pub busiest_weekday: Option<Weekday>,
    pub busiest_hour: Option<u32>,
    pub busiest_period: Option<TimeOfDay>,
}

pub fn time_stats(table: &TripTable) -> TimeStats {
    let trips = table.trips();

    let months: Vec<u32> = trips.iter().map(Trip::month).collect();
    let weekdays: Vec<Weekday> = trips.iter().map(Trip::weekday).collect();
    let hours: Vec<u32> = trips.iter().map(Trip::hour).collect();
    let periods: Vec<TimeOfDay> = trips.iter().map(Trip::period).collect();

    TimeStats {
        busiest_month: mode(&months),
        busiest_weekday: mode(&weekdays),
        busiest_hour: mode(&hours),
        busiest_period: mode(&periods),
    }
}
