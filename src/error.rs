//! Error types for iobench-plot.

use std::io;
use thiserror::Error;

/// Structured error types for iobench-plot
#[derive(Error, Debug)]
pub enum Error {
    /// Empty or otherwise unusable measurement data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A results table lacks a required column.
    #[error("missing column `{column}` (found: {})", available.join(", "))]
    MissingColumn {
        /// Name of the required column.
        column: String,
        /// Header names present in the table.
        available: Vec<String>,
    },

    /// A cell could not be parsed as a number.
    #[error("invalid {column} value {value:?} in row {row}")]
    InvalidValue {
        /// One-based data row number, not counting the header.
        row: usize,
        /// Column the value belongs to.
        column: String,
        /// Raw cell contents.
        value: String,
    },

    /// JSON serialization error.
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    /// CSV parsing or serialization error.
    #[error("CSV processing failed")]
    Csv(#[from] csv::Error),

    /// Configuration error.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Chart path with an extension no backend can write.
    #[error("unsupported chart format: {0}")]
    UnsupportedChartFormat(String),

    /// Drawing backend failure.
    #[error("chart rendering failed: {0}")]
    Chart(String),

    /// I/O error with context.
    #[error("{message}: {path}")]
    Io {
        /// File path where error occurred.
        path: String,
        /// Error description.
        message: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
