//! Error types for time-log conversion.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while converting a time log.
#[derive(Error, Debug)]
pub enum TimelogError {
    #[error("Invalid argument number. got={got}, want=1 or 2")]
    ArgumentCount { got: usize },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid date '{input}'. Expected YYYY-M-D")]
    DateParse {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Midnight of {0} does not exist in the local time zone")]
    NonexistentMidnight(NaiveDate),

    #[error("Failed to read time log from stdin")]
    InputRead(#[from] io::Error),

    #[error("Line {line_no}: expected '<marker> H:M description', got '{line}'")]
    MalformedLine { line_no: usize, line: String },

    #[error("Invalid clock '{token}': {reason}")]
    ClockParse { token: String, reason: String },

    #[error("Failed to serialize events")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for time-log operations.
pub type TimelogResult<T> = Result<T, TimelogError>;
