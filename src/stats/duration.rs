//! Total, average, longest, and shortest trip durations.

use crate::data::table::TripTable;
use crate::models::trip::Trip;

/// Endpoints of a single noteworthy trip (longest or shortest).
#[derive(Debug, Clone, PartialEq)]
pub struct TripLeg {
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
}

impl TripLeg {
    fn from_trip(trip: &Trip) -> Self {
        Self {
            duration_secs: trip.duration_secs,
            start_station: trip.start_station.clone(),
            end_station: trip.end_station.clone(),
        }
    }

    pub fn is_round_trip(&self) -> bool {
        self.start_station == self.end_station
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
    pub longest: TripLeg,
    pub shortest: TripLeg,
}

/// `None` when the table is empty: sum/mean/min/max are undefined there.
/// Ties on longest/shortest keep the first matching trip in table order.
pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    let trips = table.trips();
    let first = trips.first()?;

    let mut total = 0.0;
    let mut longest = first;
    let mut shortest = first;
    for trip in trips {
        total += trip.duration_secs;
        if trip.duration_secs > longest.duration_secs {
            longest = trip;
        }
        if trip.duration_secs < shortest.duration_secs {
            shortest = trip;
        }
    }

    Some(DurationStats {
        total_secs: total,
        mean_secs: total / trips.len() as f64,
        longest: TripLeg::from_trip(longest),
        shortest: TripLeg::from_trip(shortest),
    })
}
