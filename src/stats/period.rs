//! Most popular route within each time-of-day bucket.

use crate::data::table::TripTable;
use crate::models::time_of_day::TimeOfDay;
use crate::stats::mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTrips {
    pub period: TimeOfDay,
    pub rides: usize,
    pub top_route: (String, String),
}

/// One entry per non-empty bucket, in canonical Morning→Night order;
/// buckets with no trips are simply absent.
pub fn period_trips(table: &TripTable) -> Vec<PeriodTrips> {
    TimeOfDay::ALL
        .iter()
        .filter_map(|&period| {
            let routes: Vec<(String, String)> = table
                .trips()
                .iter()
                .filter(|t| t.period() == period)
                .map(|t| t.route())
                .collect();

            let top_route = mode(&routes)?;
            Some(PeriodTrips {
                period,
                rides: routes.len(),
                top_route,
            })
        })
        .collect()
}
