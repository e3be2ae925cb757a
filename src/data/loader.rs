//! Dataset loading: CSV → typed `TripTable`, filtered once.

use crate::data::catalog::Catalog;
use crate::data::table::{Schema, TripTable};
use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::filter::{DayFilter, MonthFilter};
use crate::models::trip::Trip;
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const COL_START_TIME: &str = "Start Time";
const COL_END_TIME: &str = "End Time";
const COL_DURATION: &str = "Trip Duration";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_USER_TYPE: &str = "User Type";
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// Read the city's dataset, derive month/weekday for every row, and apply
/// the two filters conjunctively. An empty result is valid.
///
/// The CSV reader (and its file handle) is dropped before this returns,
/// success or error.
pub fn load_trips(
    catalog: &Catalog,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> AppResult<TripTable> {
    let path = catalog.dataset_path(city);
    if !path.exists() {
        return Err(AppError::DatasetNotFound {
            city: city.as_str(),
            path: path.display().to_string(),
        });
    }

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(&path)?;

    let headers = reader.headers()?.clone();
    let find = |column: &str| headers.iter().position(|h| h == column);
    let require = |column: &'static str| {
        find(column).ok_or_else(|| AppError::MissingColumn {
            path: path.display().to_string(),
            column,
        })
    };

    let c_start_time = require(COL_START_TIME)?;
    let c_end_time = require(COL_END_TIME)?;
    let c_duration = require(COL_DURATION)?;
    let c_start_station = require(COL_START_STATION)?;
    let c_end_station = require(COL_END_STATION)?;
    let c_user_type = require(COL_USER_TYPE)?;

    let c_gender = find(COL_GENDER);
    let c_birth_year = find(COL_BIRTH_YEAR);
    let schema = Schema {
        has_gender: c_gender.is_some(),
        has_birth_year: c_birth_year.is_some(),
    };

    let mut trips = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 2; // data starts on line 2, after the header

        let start_time = parse_timestamp(cell(&record, c_start_time), row)?;
        let end_time = parse_timestamp(cell(&record, c_end_time), row)?;
        let duration_secs = parse_duration(cell(&record, c_duration), row)?;
        let gender = c_gender.and_then(|c| optional_cell(&record, c));
        let birth_year = match c_birth_year {
            Some(c) => parse_birth_year(cell(&record, c), row)?,
            None => None,
        };

        trips.push(Trip::new(
            start_time,
            end_time,
            duration_secs,
            cell(&record, c_start_station).to_string(),
            cell(&record, c_end_station).to_string(),
            cell(&record, c_user_type).to_string(),
            gender,
            birth_year,
        ));
    }

    Ok(TripTable::new(schema, trips).filtered(month, day))
}

fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

fn optional_cell(record: &StringRecord, index: usize) -> Option<String> {
    let value = cell(record, index);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_timestamp(value: &str, row: usize) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
        AppError::InvalidTimestamp {
            row,
            value: value.to_string(),
        }
    })
}

fn parse_duration(value: &str, row: usize) -> AppResult<f64> {
    match value.parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs >= 0.0 => Ok(secs),
        _ => Err(AppError::InvalidDuration {
            row,
            value: value.to_string(),
        }),
    }
}

/// Birth years appear as "1992", "1992.0", or an empty cell.
fn parse_birth_year(value: &str, row: usize) -> AppResult<Option<i32>> {
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(year) = value.parse::<i32>() {
        return Ok(Some(year));
    }
    if let Ok(year) = value.parse::<f64>()
        && year.is_finite()
    {
        return Ok(Some(year.trunc() as i32));
    }
    Err(AppError::InvalidBirthYear {
        row,
        value: value.to_string(),
    })
}
