//! Normalizer — projects a decoded payload and a raw UTM medium into a
//! [`LeadRecord`](crate::LeadRecord).
//!
//! Shared by the text and row extraction paths. The only per-path difference
//! is which [`NaMatch`] rule decides that a UTM medium is the "n/a"
//! placeholder; that choice lives in [`UtmPolicy`].

use serde_json::{Map, Value};

use crate::error::RecordError;
use crate::types::{LeadRecord, NaMatch};

/// Key of the payload sub-object holding the contact fields.
pub const FIELD_INFORMATION: &str = "field_information";

/// Separator used when joining categories.
pub const CATEGORY_SEPARATOR: &str = ", ";

/// Written in place of an empty category list.
pub const NO_CATEGORIES: &str = "N/A";

/// How a raw UTM medium becomes the final value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtmPolicy {
    /// Substituted for empty and placeholder values.
    pub organic_label: String,
    pub na_match: NaMatch,
}

impl UtmPolicy {
    pub fn new(organic_label: impl Into<String>, na_match: NaMatch) -> Self {
        Self {
            organic_label: organic_label.into(),
            na_match,
        }
    }

    /// Default policy for pasted text blocks: only the literal `N/A` is a
    /// placeholder.
    pub fn text_default() -> Self {
        Self::new("Organic", NaMatch::Exact)
    }

    /// Default policy for spreadsheet rows: `n/a` in any case is a placeholder.
    pub fn row_default() -> Self {
        Self::new("Organic", NaMatch::CaseInsensitive)
    }

    /// Trim `raw`; fall back to the organic label when it is absent, empty or
    /// a placeholder.
    pub fn apply(&self, raw: Option<&str>) -> String {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() || self.na_match.is_placeholder(trimmed) {
            self.organic_label.clone()
        } else {
            trimmed.to_string()
        }
    }
}

/// Decode a payload string. Thin wrapper so both paths report the same error.
pub fn decode_payload(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Build a lead from a decoded payload (or its decode error) and a raw UTM
/// medium.
///
/// A decode error is passed straight through as [`RecordError::JsonDecode`];
/// the caller decides whether to skip or report it. A payload that decodes to
/// anything other than an object is [`RecordError::MalformedField`].
pub fn normalize(
    payload: Result<Value, serde_json::Error>,
    raw_utm: Option<&str>,
    policy: &UtmPolicy,
) -> Result<LeadRecord, RecordError> {
    let payload = payload?;
    let obj = payload.as_object().ok_or(RecordError::MalformedField {
        field: "payload",
        expected: "a JSON object",
    })?;
    let empty = Map::new();
    let info = obj
        .get(FIELD_INFORMATION)
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    Ok(LeadRecord {
        contact_number: scalar_field(info, "contactNumber")?,
        brand_name: scalar_field(info, "brandName")?,
        categories: categories_field(info)?,
        utm_medium: policy.apply(raw_utm),
    })
}

/// A string-ish member, `""` when absent or null. Numbers and booleans keep
/// their JSON text.
fn scalar_field(info: &Map<String, Value>, field: &'static str) -> Result<String, RecordError> {
    match info.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
        Some(Value::Array(_) | Value::Object(_)) => Err(RecordError::MalformedField {
            field,
            expected: "a string",
        }),
    }
}

fn categories_field(info: &Map<String, Value>) -> Result<String, RecordError> {
    const FIELD: &str = "categories";

    let items = match info.get(FIELD) {
        None | Some(Value::Null) => return Ok(NO_CATEGORIES.to_string()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(RecordError::MalformedField {
                field: FIELD,
                expected: "an array of strings",
            })
        }
    };

    let names = items
        .iter()
        .map(|v| {
            v.as_str().ok_or(RecordError::MalformedField {
                field: FIELD,
                expected: "an array of strings",
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Only an empty join falls back; `["", ""]` still yields ", ".
    let joined = names.join(CATEGORY_SEPARATOR);
    if joined.is_empty() {
        Ok(NO_CATEGORIES.to_string())
    } else {
        Ok(joined)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
