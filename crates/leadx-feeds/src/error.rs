//! Error types for leadx-feeds.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook formats are not read; export the sheet as CSV instead.
    #[error("unsupported spreadsheet format `.{extension}` (export the sheet as CSV)")]
    UnsupportedFormat { extension: String },
}
