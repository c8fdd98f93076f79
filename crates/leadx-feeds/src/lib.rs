//! leadx-feeds — input source adapters for leadx.
//!
//! Each adapter turns an external input into the shape `leadx-core` expects:
//! a whole `String` for pasted text blocks, or a [`leadx_core::RowTable`] for
//! spreadsheet exports.

pub mod error;
pub mod spreadsheet;
pub mod text;

pub use error::FeedError;
pub use spreadsheet::{open_row_table, CsvRowReader};
pub use text::{read_text, TextSource};

/// Implemented by every spreadsheet reader.
pub trait RowReader {
    /// Read the header and all rows, in order.
    fn read_table(&mut self) -> Result<leadx_core::RowTable, FeedError>;
}
