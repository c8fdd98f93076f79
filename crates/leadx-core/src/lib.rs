//! leadx-core — lead extraction core library.
//!
//! Turns lead-capture records into flat contact rows. Two inputs are
//! supported: pasted text blocks (`Event_datum:` / `Utm Medium:` pairs) and
//! spreadsheet row tables with `Event Datum` / `Utm Medium` columns.
//!
//! # Architecture
//!
//! ```text
//! text ──► Segmenter ──┐
//!                      ├──► Normalizer ──► LeadRecord ──► Export
//! RowTable ────────────┘
//! ```
//!
//! Everything is synchronous and stateless per call.

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod normalizer;
pub mod segmenter;
pub mod types;

pub use error::{LeadError, RecordError, RowFailure};
pub use export::ExportFormat;
pub use extract::{Extractor, RowExtraction, RowOutcome};
pub use normalizer::UtmPolicy;
pub use types::{LeadRecord, NaMatch, RawRecordRow, RawRecordText, RowTable};
