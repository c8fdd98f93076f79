//! Domain-specific assertion macros for leadx harnesses.
//!
//! These add context-rich failure messages that make it clear *which* lead
//! invariant was violated and for which record.

use leadx_core::{LeadRecord, NaMatch};

// ---------------------------------------------------------------------------
// UTM medium assertions
// ---------------------------------------------------------------------------

/// Assert that a lead has a specific UTM medium.
///
/// ```rust
/// assert_utm!(lead, "Organic");
/// ```
#[macro_export]
macro_rules! assert_utm {
    ($lead:expr, $utm:expr) => {{
        let lead: &leadx_core::LeadRecord = &$lead;
        let expected: &str = $utm;
        if lead.utm_medium != expected {
            panic!(
                "assert_utm! failed:\n  expected: {:?}\n  actual:   {:?}\n  lead: {:?}",
                expected, lead.utm_medium, lead
            );
        }
    }};
}

/// Assert that every lead in a slice satisfies a predicate.
///
/// ```rust
/// assert_leads_all!(leads, |l| !l.utm_medium.is_empty());
/// ```
#[macro_export]
macro_rules! assert_leads_all {
    ($leads:expr, $pred:expr) => {{
        let leads: &[leadx_core::LeadRecord] = &$leads;
        let pred = $pred;
        let failing: Vec<_> = leads.iter().filter(|l| !pred(l)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_leads_all! failed: {} of {} leads did not satisfy predicate.\n  first: {:?}",
                failing.len(),
                leads.len(),
                failing[0]
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

/// Assert that a lead's UTM medium is never empty and never the placeholder
/// under `rule`.
pub fn assert_utm_normalized(lead: &LeadRecord, rule: NaMatch) {
    assert!(
        !lead.utm_medium.is_empty(),
        "normalised lead must have a non-empty utm medium: {lead:?}"
    );
    assert!(
        !rule.is_placeholder(&lead.utm_medium),
        "normalised lead must not keep the n/a placeholder ({rule}): {lead:?}"
    );
    assert_eq!(
        lead.utm_medium.trim(),
        lead.utm_medium,
        "normalised utm medium must be trimmed: {lead:?}"
    );
}

/// Assert that `categories` was filled in, either with a list or `"N/A"`.
pub fn assert_categories_well_formed(lead: &LeadRecord) {
    assert!(
        !lead.categories.is_empty(),
        "categories must fall back to N/A, never be empty: {lead:?}"
    );
}
