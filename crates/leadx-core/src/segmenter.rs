//! Segmenter — splits a pasted text block into [`RawRecordText`] values.
//!
//! A record looks like:
//!
//! ```text
//! Event_datum: {"field_information": {...}}
//! Utm Medium: google
//! ```
//!
//! The JSON blob may span several lines. It is matched lazily up to the first
//! `}` that is followed by whitespace and the `Utm Medium:` label, so nested
//! braces inside the payload are fine. The UTM medium is the rest of that
//! label's line and may be empty.

use regex::{CaptureMatches, Regex};

use crate::types::RawRecordText;

const SEGMENT_PATTERN: &str =
    r"(?s)Event_datum:[ \t]*(\{.*?\})\s+Utm Medium:[ \t]*([^\r\n]*)";

/// Compiled record pattern. Cheap to share by reference.
#[derive(Debug, Clone)]
pub struct Segmenter {
    pattern: Regex,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(SEGMENT_PATTERN).expect("built-in segment pattern must compile"),
        }
    }

    /// Lazily yield every record in `text`, in order of appearance.
    ///
    /// Yields nothing when no record matches; that is not an error.
    pub fn segments<'r, 't>(&'r self, text: &'t str) -> Segments<'r, 't> {
        Segments {
            text,
            captures: self.pattern.captures_iter(text),
            ordinal: 0,
            scanned: 0,
            line: 1,
        }
    }
}

/// Iterator returned by [`Segmenter::segments`].
#[derive(Debug)]
pub struct Segments<'r, 't> {
    text: &'t str,
    captures: CaptureMatches<'r, 't>,
    ordinal: usize,
    // Byte offset up to which newlines have been counted into `line`.
    scanned: usize,
    line: usize,
}

impl<'t> Iterator for Segments<'_, 't> {
    type Item = RawRecordText<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        let whole = caps.get(0)?;
        let payload = caps.get(1)?.as_str();
        let utm_medium = caps.get(2).map_or("", |m| m.as_str());

        self.line += self.text[self.scanned..whole.start()]
            .bytes()
            .filter(|&b| b == b'\n')
            .count();
        self.scanned = whole.start();

        let record = RawRecordText {
            ordinal: self.ordinal,
            line: self.line,
            payload,
            utm_medium,
        };
        self.ordinal += 1;
        Some(record)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
