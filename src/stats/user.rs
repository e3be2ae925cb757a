//! User demographics: user types, gender, birth years.

use crate::data::table::TripTable;
use crate::stats::{frequency_table, mode};

/// A statistic over a column that a city's dataset may not carry at all.
/// `Unavailable` (no such column) is reported differently from `NoData`
/// (column present, but the filtered table holds no usable values).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demographic<T> {
    Unavailable,
    NoData,
    Stat(T),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearSummary {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Demographic<Vec<(String, usize)>>,
    pub birth_years: Demographic<BirthYearSummary>,
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = table.trips();
    let schema = table.schema();

    let user_types: Vec<String> = trips.iter().map(|t| t.user_type.clone()).collect();

    let genders = if !schema.has_gender {
        Demographic::Unavailable
    } else {
        let values: Vec<String> = trips.iter().filter_map(|t| t.gender.clone()).collect();
        if values.is_empty() {
            Demographic::NoData
        } else {
            Demographic::Stat(frequency_table(&values))
        }
    };

    let birth_years = if !schema.has_birth_year {
        Demographic::Unavailable
    } else {
        let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
        match summarize_birth_years(&years) {
            Some(summary) => Demographic::Stat(summary),
            None => Demographic::NoData,
        }
    };

    UserStats {
        user_types: frequency_table(&user_types),
        genders,
        birth_years,
    }
}

fn summarize_birth_years(years: &[i32]) -> Option<BirthYearSummary> {
    Some(BirthYearSummary {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years)?,
    })
}
