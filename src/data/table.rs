use crate::models::filter::{DayFilter, MonthFilter};
use crate::models::trip::Trip;

/// Which optional columns the city's dataset carries.
/// Decided once from the CSV header at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// Ordered collection of trips for one city, plus its column schema.
/// Immutable after construction; analyzers only read it.
#[derive(Debug, Clone)]
pub struct TripTable {
    schema: Schema,
    trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(schema: Schema, trips: Vec<Trip>) -> Self {
        Self { schema, trips }
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep only trips matching both filters; survivors stay in order.
    pub fn filtered(mut self, month: MonthFilter, day: DayFilter) -> Self {
        self.trips
            .retain(|t| month.matches(t.month()) && day.matches(t.weekday()));
        self
    }
}
