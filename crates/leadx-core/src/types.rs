//! Core types for leadx-core.
//!
//! This module defines the data structures shared by both extraction paths:
//! the transient raw records produced by segmentation ([`RawRecordText`]) and
//! by the spreadsheet reader ([`RawRecordRow`], [`RowTable`]), and the durable
//! output, [`LeadRecord`].

use serde::Serialize;

/// Column holding the JSON payload in spreadsheet exports.
pub const EVENT_DATUM_COLUMN: &str = "Event Datum";
/// Column holding the raw UTM medium in spreadsheet exports.
pub const UTM_MEDIUM_COLUMN: &str = "Utm Medium";

/// Output column order. Every export format uses exactly this order.
pub const LEAD_COLUMNS: [&str; 4] = ["Contact No.", "Brand Name", "Categories", "Utm Medium"];

/// A normalised lead, one per successfully parsed input record.
///
/// Serialises with the display column names so that CSV and JSON exports
/// carry the same headers as the plain-text table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LeadRecord {
    #[serde(rename = "Contact No.")]
    pub contact_number: String,
    #[serde(rename = "Brand Name")]
    pub brand_name: String,
    /// Categories joined with `", "`, or `"N/A"` when there were none.
    #[serde(rename = "Categories")]
    pub categories: String,
    /// Never empty, never the "n/a" placeholder.
    #[serde(rename = "Utm Medium")]
    pub utm_medium: String,
}

impl LeadRecord {
    /// Cells in [`LEAD_COLUMNS`] order.
    pub fn cells(&self) -> [&str; 4] {
        [
            &self.contact_number,
            &self.brand_name,
            &self.categories,
            &self.utm_medium,
        ]
    }
}

/// One record matched by the segmenter in a pasted text block.
///
/// Borrows from the input; lives only until it is normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecordText<'a> {
    /// 0-based position among all matches in the input.
    pub ordinal: usize,
    /// 1-based line on which `Event_datum:` appears.
    pub line: usize,
    /// The brace-delimited JSON payload, braces included.
    pub payload: &'a str,
    /// Everything after `Utm Medium:` up to the end of that line. May be empty.
    pub utm_medium: &'a str,
}

/// One spreadsheet row, keyed by the required column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecordRow {
    /// 0-based data-row index (the header is not counted).
    pub index: usize,
    /// `None` when the cell is blank or missing from a short row.
    pub event_datum: Option<String>,
    /// `None` when the cell is blank or missing from a short row.
    pub utm_medium: Option<String>,
}

/// An ordered table of spreadsheet rows plus the header it was read with.
///
/// Produced by an external reader (see `leadx-feeds`). Column presence is
/// checked against `columns`, not inferred from the rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RowTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Which matching rule decides that a UTM medium is the "n/a" placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NaMatch {
    /// Only the literal `N/A`.
    Exact,
    /// `n/a` in any letter case.
    CaseInsensitive,
}

impl NaMatch {
    pub fn is_placeholder(self, value: &str) -> bool {
        match self {
            NaMatch::Exact => value == "N/A",
            NaMatch::CaseInsensitive => value.eq_ignore_ascii_case("n/a"),
        }
    }
}

impl std::fmt::Display for NaMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NaMatch::Exact => write!(f, "exact"),
            NaMatch::CaseInsensitive => write!(f, "case_insensitive"),
        }
    }
}
