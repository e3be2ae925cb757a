//! Most popular stations and route.

use crate::data::table::TripTable;
use crate::stats::mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub top_start: Option<String>,
    pub top_end: Option<String>,
    /// The route is kept as a (start, end) pair; joining the names for
    /// display is the renderer's concern.
    pub top_route: Option<(String, String)>,
}

pub fn station_stats(table: &TripTable) -> StationStats {
    let trips = table.trips();

    let starts: Vec<String> = trips.iter().map(|t| t.start_station.clone()).collect();
    let ends: Vec<String> = trips.iter().map(|t| t.end_station.clone()).collect();
    let routes: Vec<(String, String)> = trips.iter().map(|t| t.route()).collect();

    StationStats {
        top_start: mode(&starts),
        top_end: mode(&ends),
        top_route: mode(&routes),
    }
}
