//! Export — renders lead sequences with the fixed column order
//! `Contact No.`, `Brand Name`, `Categories`, `Utm Medium`.

use std::io::Write;

use serde::Deserialize;

use crate::error::LeadError;
use crate::types::{LeadRecord, LEAD_COLUMNS};

/// Output format for a lead table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Aligned plain-text columns.
    Table,
    Csv,
    /// Pretty-printed JSON array.
    Json,
    /// One compact JSON object per line.
    Jsonl,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Table => write!(f, "table"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ExportFormat::Table),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonl" => Ok(ExportFormat::Jsonl),
            other => Err(format!("unknown format: {other} (expected table|csv|json|jsonl)")),
        }
    }
}

/// Write `leads` to `out` in the requested format.
pub fn write_leads<W: Write>(
    out: &mut W,
    leads: &[LeadRecord],
    format: ExportFormat,
) -> Result<(), LeadError> {
    match format {
        ExportFormat::Table => write_table(out, leads),
        ExportFormat::Csv => write_csv(out, leads),
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, leads)?;
            writeln!(out)?;
            Ok(())
        }
        ExportFormat::Jsonl => {
            for lead in leads {
                serde_json::to_writer(&mut *out, lead)?;
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

/// Render `leads` to a `String`.
pub fn render(leads: &[LeadRecord], format: ExportFormat) -> Result<String, LeadError> {
    let mut buf = Vec::new();
    write_leads(&mut buf, leads, format)?;
    Ok(String::from_utf8(buf)?)
}

fn write_csv<W: Write>(out: &mut W, leads: &[LeadRecord]) -> Result<(), LeadError> {
    let mut wtr = csv::Writer::from_writer(out);
    // Written explicitly so an empty table still has a header.
    wtr.write_record(LEAD_COLUMNS)?;
    for lead in leads {
        wtr.write_record(lead.cells())?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, leads: &[LeadRecord]) -> Result<(), LeadError> {
    let mut widths = LEAD_COLUMNS.map(|h| h.chars().count());
    for lead in leads {
        for (w, cell) in widths.iter_mut().zip(lead.cells()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    write_row(out, &LEAD_COLUMNS, &widths)?;
    for lead in leads {
        write_row(out, &lead.cells(), &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[&str; 4], widths: &[usize; 4]) -> Result<(), LeadError> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        if i + 1 < cells.len() {
            let pad = width - cell.chars().count();
            line.extend(std::iter::repeat(' ').take(pad));
        }
    }
    writeln!(out, "{line}")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
