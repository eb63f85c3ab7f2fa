//! Contact rows read from the campaign spreadsheet.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// One row of the contact sheet, keyed by normalized header.
///
/// Records are read fresh for every campaign run and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    fields: BTreeMap<String, String>,
}

impl ContactRecord {
    /// Field holding the greeting name.
    pub const NAME_FIELD: &'static str = "name";

    /// Field holding the unnormalized phone text.
    pub const PHONE_FIELD: &'static str = "phone_number";

    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Build a record from `(key, value)` pairs; keys are used as given.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The contact's name, if present and not blank.
    pub fn display_name(&self) -> Option<&str> {
        self.field(Self::NAME_FIELD)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Raw phone text as stored in the sheet; empty when the column is absent.
    pub fn raw_phone(&self) -> &str {
        self.field(Self::PHONE_FIELD).unwrap_or("")
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Non-empty fields other than name and phone, passed through to the call.
    pub fn extra_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter(|(key, value)| {
                key.as_str() != Self::NAME_FIELD
                    && key.as_str() != Self::PHONE_FIELD
                    && !value.trim().is_empty()
            })
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Normalize header text into a field key: trimmed, lowercased, whitespace runs as `_`.
pub fn normalize_header(header: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&header.trim().to_lowercase(), "_")
        .into_owned()
}

/// Map sheet rows into contact records.
///
/// The first row is the header. Fewer than two rows yields no records.
/// Missing cells become empty strings; cells past the last header and
/// columns with a blank header are ignored.
pub fn records_from_rows(rows: &[Vec<String>]) -> Vec<ContactRecord> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    if data_rows.is_empty() {
        return Vec::new();
    }

    let headers: Vec<String> = header_row.iter().map(|h| normalize_header(h)).collect();

    data_rows
        .iter()
        .map(|row| {
            let fields = headers
                .iter()
                .enumerate()
                .filter(|(_, header)| !header.is_empty())
                .map(|(index, header)| {
                    let value = row.get(index).cloned().unwrap_or_default();
                    (header.clone(), value)
                })
                .collect();
            ContactRecord::new(fields)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Phone Number"), "phone_number");
        assert_eq!(normalize_header("  Name "), "name");
        assert_eq!(normalize_header("Company\t  Name"), "company_name");
        assert_eq!(normalize_header("EMAIL"), "email");
    }

    #[test]
    fn test_records_from_rows() {
        let records = records_from_rows(&rows(&[
            &["Name", "Phone Number", "Company Name"],
            &["Ada", "(555) 123-4567", "Engines Ltd"],
            &["Grace", "+15559876543"],
        ]));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].display_name(), Some("Ada"));
        assert_eq!(records[0].raw_phone(), "(555) 123-4567");
        assert_eq!(records[0].field("company_name"), Some("Engines Ltd"));

        // Missing trailing cell becomes an empty string
        assert_eq!(records[1].field("company_name"), Some(""));
    }

    #[test]
    fn test_header_only_or_empty_yields_nothing() {
        assert!(records_from_rows(&[]).is_empty());
        assert!(records_from_rows(&rows(&[&["Name", "Phone Number"]])).is_empty());
    }

    #[test]
    fn test_extra_cells_and_blank_headers_ignored() {
        let records = records_from_rows(&rows(&[
            &["Name", "", "Phone Number"],
            &["Ada", "junk", "5551234567", "overflow"],
        ]));

        assert_eq!(records[0].fields().len(), 2);
        assert_eq!(records[0].raw_phone(), "5551234567");
    }

    #[test]
    fn test_display_name_blank_is_none() {
        let record = ContactRecord::from_pairs([("name", "  "), ("phone_number", "1")]);
        assert_eq!(record.display_name(), None);
    }

    #[test]
    fn test_raw_phone_absent_is_empty() {
        let record = ContactRecord::from_pairs([("name", "Ada")]);
        assert_eq!(record.raw_phone(), "");
    }

    #[test]
    fn test_extra_fields_skip_name_phone_and_blanks() {
        let record = ContactRecord::from_pairs([
            ("name", "Ada"),
            ("phone_number", "5551234567"),
            ("industry", "Computing"),
            ("notes", ""),
        ]);

        let extras: Vec<_> = record.extra_fields().collect();
        assert_eq!(extras, vec![("industry", "Computing")]);
    }
}
