//! Extraction pipelines — pasted text blocks and spreadsheet row tables.
//!
//! ```text
//! text ──► Segmenter ──► decode ──┐
//!                                 ├──► normalize ──► LeadRecord
//! RowTable ──► column check ──────┘
//! ```
//!
//! Both paths isolate per-record faults: each record yields its own `Result`
//! and the batch loop never exits early. The text path drops failures after
//! logging them; the row path hands them back to the caller as
//! [`RowFailure`]s so they can be shown next to the table.

use tracing::{debug, warn};

use crate::config::PolicyConfig;
use crate::error::{LeadError, RecordError, RowFailure};
use crate::normalizer::{decode_payload, normalize, UtmPolicy};
use crate::segmenter::Segmenter;
use crate::types::{LeadRecord, RawRecordRow, RowTable, EVENT_DATUM_COLUMN, UTM_MEDIUM_COLUMN};

/// Outcome of one spreadsheet row.
pub type RowOutcome = Result<LeadRecord, RowFailure>;

/// Leads and per-row failures from one row-table extraction, both in row order.
#[derive(Debug, Default)]
pub struct RowExtraction {
    pub leads: Vec<LeadRecord>,
    pub failures: Vec<RowFailure>,
}

impl FromIterator<RowOutcome> for RowExtraction {
    fn from_iter<I: IntoIterator<Item = RowOutcome>>(iter: I) -> Self {
        let mut out = RowExtraction::default();
        for outcome in iter {
            match outcome {
                Ok(lead) => out.leads.push(lead),
                Err(failure) => out.failures.push(failure),
            }
        }
        out
    }
}

/// Runs both extraction paths with their own UTM policies.
#[derive(Debug, Clone)]
pub struct Extractor {
    segmenter: Segmenter,
    text_policy: UtmPolicy,
    row_policy: UtmPolicy,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(UtmPolicy::text_default(), UtmPolicy::row_default())
    }
}

impl Extractor {
    pub fn new(text_policy: UtmPolicy, row_policy: UtmPolicy) -> Self {
        Self {
            segmenter: Segmenter::new(),
            text_policy,
            row_policy,
        }
    }

    /// Build from the `[policy]` section of the configuration.
    pub fn from_config(policy: &PolicyConfig) -> Self {
        Self::new(
            UtmPolicy::new(policy.organic_label.clone(), policy.text_na_match),
            UtmPolicy::new(policy.organic_label.clone(), policy.row_na_match),
        )
    }

    pub fn text_policy(&self) -> &UtmPolicy {
        &self.text_policy
    }

    pub fn row_policy(&self) -> &UtmPolicy {
        &self.row_policy
    }

    // -----------------------------------------------------------------------
    // Text path
    // -----------------------------------------------------------------------

    /// Lazily normalise every record in a pasted text block.
    ///
    /// Each item is the record's ordinal paired with its outcome, so callers
    /// that stream can still tell which record failed.
    pub fn text_outcomes<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (usize, Result<LeadRecord, RecordError>)> + 'a {
        self.segmenter.segments(text).map(move |raw| {
            let outcome = normalize(
                decode_payload(raw.payload),
                Some(raw.utm_medium),
                &self.text_policy,
            );
            if let Err(e) = &outcome {
                warn!(record = raw.ordinal, line = raw.line, error = %e, "skipping lead record");
            }
            (raw.ordinal, outcome)
        })
    }

    /// Normalise a pasted text block, skipping records that fail.
    ///
    /// Zero matching records gives an empty vector.
    pub fn extract_text(&self, text: &str) -> Vec<LeadRecord> {
        let mut matched = 0usize;
        let leads: Vec<LeadRecord> = self
            .text_outcomes(text)
            .filter_map(|(_, outcome)| {
                matched += 1;
                outcome.ok()
            })
            .collect();
        debug!(matched, extracted = leads.len(), "text extraction finished");
        leads
    }

    // -----------------------------------------------------------------------
    // Row path
    // -----------------------------------------------------------------------

    /// Check the required columns, then normalise every row in order.
    ///
    /// Fails with [`LeadError::MissingColumns`] before touching any row when
    /// either `Event Datum` or `Utm Medium` is absent from the header.
    pub fn row_outcomes<'a>(
        &'a self,
        table: &'a RowTable,
    ) -> Result<impl Iterator<Item = RowOutcome> + 'a, LeadError> {
        let (datum_col, utm_col) = required_columns(table)?;

        Ok(table.rows.iter().enumerate().map(move |(index, cells)| {
            let cell = |col: usize| cells.get(col).cloned().flatten();
            let raw = RawRecordRow {
                index,
                event_datum: cell(datum_col),
                utm_medium: cell(utm_col),
            };
            self.normalize_row(&raw).map_err(|error| {
                warn!(row = index, error = %error, "error parsing Event Datum");
                RowFailure { row: index, error }
            })
        }))
    }

    /// Normalise a whole row table, collecting leads and per-row failures.
    pub fn extract_rows(&self, table: &RowTable) -> Result<RowExtraction, LeadError> {
        let extraction: RowExtraction = self.row_outcomes(table)?.collect();
        debug!(
            rows = table.len(),
            extracted = extraction.leads.len(),
            failed = extraction.failures.len(),
            "row extraction finished"
        );
        Ok(extraction)
    }

    /// Normalise one already-keyed row.
    pub fn normalize_row(&self, row: &RawRecordRow) -> Result<LeadRecord, RecordError> {
        let datum = row
            .event_datum
            .as_deref()
            .ok_or(RecordError::MissingEventDatum)?;
        normalize(
            decode_payload(datum),
            row.utm_medium.as_deref(),
            &self.row_policy,
        )
    }
}

/// Header positions of `Event Datum` and `Utm Medium`.
fn required_columns(table: &RowTable) -> Result<(usize, usize), LeadError> {
    let datum = table.column_index(EVENT_DATUM_COLUMN);
    let utm = table.column_index(UTM_MEDIUM_COLUMN);

    match (datum, utm) {
        (Some(d), Some(u)) => Ok((d, u)),
        _ => {
            let missing = [(EVENT_DATUM_COLUMN, datum), (UTM_MEDIUM_COLUMN, utm)]
                .into_iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            Err(LeadError::MissingColumns {
                required: vec![EVENT_DATUM_COLUMN.to_string(), UTM_MEDIUM_COLUMN.to_string()],
                missing,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
