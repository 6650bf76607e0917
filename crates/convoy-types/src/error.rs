//! Error types for the convoy pipeline

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML write error: {0}")]
    Xml(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported input file: {0}")]
    UnsupportedExtension(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Row {row}: invalid value for {column}: {value:?}")]
    InvalidField {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Record sets differ in shape: original has {original} rows, cleaned has {cleaned}")]
    ShapeMismatch { original: usize, cleaned: usize },

    #[error("Vehicle {vehicle_id}: engine capacity is zero, score is undefined")]
    ZeroEngineCapacity { vehicle_id: i64 },

    #[error("Vehicle {vehicle_id}: no score computed before insert")]
    MissingScore { vehicle_id: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
