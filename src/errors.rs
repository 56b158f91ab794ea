//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
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
    // Persistence
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// A time string outside the canonical `HH:MM` 00:00-23:59 domain
    /// reached the axis table.
    #[error("Unknown time on the axis: '{0}'")]
    UnknownTime(String),

    // ---------------------------
    // Range / logic errors
    // ---------------------------
    #[error("Leaving time {leaving} precedes arrival time {arrival}")]
    InvalidTimeRange { arrival: String, leaving: String },

    #[error("End date {end} precedes start date {start}")]
    InvalidDateRange { start: String, end: String },

    #[error("Too many dates: {days} requested, maximum is {max}. Please reduce your date range")]
    DateRangeTooLarge { days: usize, max: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
