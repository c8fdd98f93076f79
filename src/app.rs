//! Command handlers behind the `leadx` binary.
//!
//! Handlers take explicit writers so the harnesses can capture what would go
//! to stdout (the lead table) and stderr (per-row failure reports).

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context};
use leadx_core::config::Config;
use leadx_core::export::{write_leads, ExportFormat};
use leadx_core::Extractor;
use leadx_feeds::{open_row_table, read_text, TextSource};

/// Load the config named on the command line, or the user config otherwise.
///
/// A broken user config falls back to the built-in defaults with a warning;
/// an explicit `--config` that cannot be read is an error.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Config::defaults()
        })),
    }
}

/// Extract leads from a pasted text block and write the table to `out`.
///
/// Returns the number of leads written. Blank input is an error; input with
/// no matching records writes an empty table.
pub fn run_text<W: Write>(
    text: &str,
    extractor: &Extractor,
    format: ExportFormat,
    out: &mut W,
) -> anyhow::Result<usize> {
    if text.trim().is_empty() {
        bail!("no lead data provided; paste the lead data first");
    }

    let leads = extractor.extract_text(text);
    write_leads(out, &leads, format)?;
    Ok(leads.len())
}

/// Extract leads from a row table file.
///
/// Leads go to `out`; each failed row is reported on `err` and does not stop
/// the batch. Missing required columns fail before anything is written.
pub fn run_rows<W: Write, E: Write>(
    path: &Path,
    extractor: &Extractor,
    format: ExportFormat,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<usize> {
    let table = open_row_table(path)
        .with_context(|| format!("error processing file {}", path.display()))?;
    let extraction = extractor.extract_rows(&table)?;

    for failure in &extraction.failures {
        writeln!(err, "{failure}")?;
    }
    write_leads(out, &extraction.leads, format)?;
    Ok(extraction.leads.len())
}

/// Read a text block from `source` and run [`run_text`] on it.
pub fn run_text_source<W: Write>(
    source: &TextSource,
    extractor: &Extractor,
    format: ExportFormat,
    out: &mut W,
) -> anyhow::Result<usize> {
    let text = read_text(source)?;
    run_text(&text, extractor, format, out)
}
