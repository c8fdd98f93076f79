//! Static lead corpora used across harnesses.
//!
//! Text corpora are pasted-block strings as a sales rep would copy them out
//! of the form backend; CSV corpora mirror a spreadsheet export.

/// Payload with every contact field set.
pub const PAYLOAD_ACME: &str = r#"{"field_information": {"brandName": "Acme", "contactNumber": "9998887777", "categories": []}}"#;

/// Payload with two categories.
pub const PAYLOAD_STRIDE: &str = r#"{"field_information": {"brandName": "Stride", "contactNumber": "9123456780", "categories": ["Apparel", "Shoes"]}}"#;

/// Payload with no `field_information` at all.
pub const PAYLOAD_BARE: &str = r#"{"event": "store_created", "source": "web"}"#;

/// Three well-formed records, one of them multi-line.
pub const TEXT_WELL_FORMED: &str = "\
Lead received 2024-01-15 10:00
Event_datum: {\"field_information\": {\"brandName\": \"Acme\", \"contactNumber\": \"9998887777\", \"categories\": []}}
Utm Medium: N/A

Lead received 2024-01-15 10:05
Event_datum: {
  \"field_information\": {
    \"brandName\": \"Stride\",
    \"contactNumber\": \"9123456780\",
    \"categories\": [\"Apparel\", \"Shoes\"]
  }
}
Utm Medium: facebook

Lead received 2024-01-15 10:09
Event_datum: {\"event\": \"store_created\", \"source\": \"web\"}
Utm Medium:
";

/// Four records; the second has a broken payload and the fourth a malformed
/// category list.
pub const TEXT_WITH_BAD_RECORDS: &str = "\
Event_datum: {\"field_information\": {\"brandName\": \"Acme\", \"contactNumber\": \"9998887777\", \"categories\": []}}
Utm Medium: google
Event_datum: {\"field_information\": {\"brandName\": \"Broken\", }
Utm Medium: cpc
Event_datum: {\"field_information\": {\"brandName\": \"Stride\", \"contactNumber\": \"9123456780\", \"categories\": [\"Apparel\", \"Shoes\"]}}
Utm Medium: n/a
Event_datum: {\"field_information\": {\"brandName\": \"Odd\", \"categories\": \"Shoes\"}}
Utm Medium: email
";

/// Text with nothing that looks like a record.
pub const TEXT_NO_RECORDS: &str = "Hi team,\nno new leads came in today.\nThanks!\n";

/// CSV export with a bad row in the middle.
pub const CSV_MIXED: &str = "\
Created At,Event Datum,Utm Medium
2024-01-15,\"{\"\"field_information\"\": {\"\"brandName\"\": \"\"Acme\"\", \"\"contactNumber\"\": \"\"9998887777\"\", \"\"categories\"\": []}}\",N/A
2024-01-16,not-json,google
2024-01-17,\"{\"\"field_information\"\": {\"\"brandName\"\": \"\"Stride\"\", \"\"contactNumber\"\": \"\"9123456780\"\", \"\"categories\"\": [\"\"Apparel\"\", \"\"Shoes\"\"]}}\",  n/a  
2024-01-18,\"{\"\"event\"\": \"\"store_created\"\"}\",
";

/// CSV export without the `Utm Medium` column.
pub const CSV_MISSING_UTM: &str = "\
Event Datum,Medium
\"{\"\"field_information\"\": {}}\",google
";

/// A text block of `n` well-formed records with rotating UTM mediums.
pub fn text_corpus(n: usize) -> String {
    const MEDIUMS: [&str; 5] = ["google", "N/A", "", "facebook", " email "];
    (0..n)
        .map(|i| {
            format!(
                "Event_datum: {{\"field_information\": {{\"brandName\": \"Brand {i}\", \"contactNumber\": \"90000{i:05}\", \"categories\": [\"Cat {}\"]}}}}\nUtm Medium: {}\n",
                i % 7,
                MEDIUMS[i % MEDIUMS.len()],
            )
        })
        .collect()
}
