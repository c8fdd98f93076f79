//! Spreadsheet input — CSV exports read into a [`RowTable`].
//!
//! Blank cells and cells missing from short rows become `None`. Header names
//! are trimmed so `" Utm Medium"` still satisfies the column check.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use leadx_core::RowTable;
use tracing::debug;

use crate::{FeedError, RowReader};

/// Reads a CSV document with a header row.
pub struct CsvRowReader<R: Read> {
    inner: csv::Reader<R>,
}

impl<R: Read> CsvRowReader<R> {
    pub fn new(reader: R) -> Self {
        let inner = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        Self { inner }
    }
}

impl<R: Read> RowReader for CsvRowReader<R> {
    fn read_table(&mut self) -> Result<RowTable, FeedError> {
        let columns = self
            .inner
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let mut table = RowTable::new(columns);

        for record in self.inner.records() {
            let record = record?;
            table.push_row(
                record
                    .iter()
                    .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                    .collect(),
            );
        }

        debug!(columns = table.columns.len(), rows = table.len(), "read CSV table");
        Ok(table)
    }
}

/// Open a spreadsheet export by path, dispatching on its extension.
///
/// `.xlsx` and `.xls` are rejected; everything else is read as CSV.
pub fn open_row_table(path: &Path) -> Result<RowTable, FeedError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if matches!(extension.as_str(), "xlsx" | "xls") {
        return Err(FeedError::UnsupportedFormat { extension });
    }

    let file = File::open(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CsvRowReader::new(file).read_table()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
