//! Test builders — ergonomic constructors for `LeadRecord` and `RowTable`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use leadx_core::{LeadRecord, RowTable};

// ---------------------------------------------------------------------------
// LeadRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for expected [`LeadRecord`] values.
///
/// # Example
///
/// ```rust
/// let lead = LeadRecordBuilder::new("9998887777")
///     .brand("Acme")
///     .utm("google")
///     .build();
/// ```
pub struct LeadRecordBuilder {
    contact_number: String,
    brand_name: String,
    categories: String,
    utm_medium: String,
}

impl LeadRecordBuilder {
    pub fn new(contact_number: impl Into<String>) -> Self {
        Self {
            contact_number: contact_number.into(),
            brand_name: String::new(),
            categories: "N/A".to_string(),
            utm_medium: "Organic".to_string(),
        }
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand_name = brand.into();
        self
    }

    pub fn categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = categories.into();
        self
    }

    pub fn utm(mut self, utm: impl Into<String>) -> Self {
        self.utm_medium = utm.into();
        self
    }

    pub fn build(self) -> LeadRecord {
        LeadRecord {
            contact_number: self.contact_number,
            brand_name: self.brand_name,
            categories: self.categories,
            utm_medium: self.utm_medium,
        }
    }
}

// ---------------------------------------------------------------------------
// RowTableBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RowTable`] inputs. Empty strings become `None`, the
/// same way the CSV reader treats blank cells.
pub struct RowTableBuilder {
    table: RowTable,
}

impl RowTableBuilder {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            table: RowTable::new(columns.iter().map(|c| c.to_string()).collect()),
        }
    }

    /// Table with the two required columns, `Event Datum` first.
    pub fn standard() -> Self {
        Self::new(&["Event Datum", "Utm Medium"])
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.table.push_row(
            cells
                .iter()
                .map(|c| (!c.is_empty()).then(|| c.to_string()))
                .collect(),
        );
        self
    }

    pub fn build(self) -> RowTable {
        self.table
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// The lead every `PAYLOAD_ACME` record normalises to, with `utm` as medium.
pub fn acme_lead(utm: &str) -> LeadRecord {
    LeadRecordBuilder::new("9998887777").brand("Acme").utm(utm).build()
}

/// The lead every `PAYLOAD_STRIDE` record normalises to, with `utm` as medium.
pub fn stride_lead(utm: &str) -> LeadRecord {
    LeadRecordBuilder::new("9123456780")
        .brand("Stride")
        .categories("Apparel, Shoes")
        .utm(utm)
        .build()
}
