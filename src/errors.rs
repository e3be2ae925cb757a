//! Unified application error type.
//! All modules (data, config, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Dataset-related
    // ---------------------------
    #[error("Dataset read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No dataset for {city}: {path} not found")]
    DatasetNotFound { city: &'static str, path: String },

    #[error("Malformed dataset {path}: missing column '{column}'")]
    MissingColumn { path: String, column: &'static str },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Row {row}: invalid timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Row {row}: invalid trip duration '{value}'")]
    InvalidDuration { row: usize, value: String },

    #[error("Row {row}: invalid birth year '{value}'")]
    InvalidBirthYear { row: usize, value: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
