//! Error types for leadx-core.
//!
//! [`RecordError`] describes why a single record produced no lead; callers
//! keep going after one. [`LeadError`] aborts a whole extraction call.

use thiserror::Error;

/// A per-record fault. Never aborts the batch.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The payload is not valid JSON.
    #[error("invalid JSON payload: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// A `field_information` member has a type that cannot be projected.
    #[error("field `{field}` must be {expected}")]
    MalformedField {
        field: &'static str,
        expected: &'static str,
    },

    /// The row has no `Event Datum` value at all.
    #[error("`Event Datum` is empty")]
    MissingEventDatum,
}

/// A [`RecordError`] tagged with the spreadsheet row it came from.
#[derive(Error, Debug)]
#[error("row {row}: error parsing Event Datum: {error}")]
pub struct RowFailure {
    /// 0-based data-row index.
    pub row: usize,
    #[source]
    pub error: RecordError,
}

/// A call-level failure. No leads are produced.
#[derive(Error, Debug)]
pub enum LeadError {
    /// The row table lacks one or both required columns.
    #[error("spreadsheet must contain {} column(s); missing: {}", quoted(.required), quoted(.missing))]
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(" and ")
}
