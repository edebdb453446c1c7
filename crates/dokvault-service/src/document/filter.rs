//! In-memory search and filtering over already-fetched records.
//!
//! These run client-side against the projected latest-version list, so
//! they are plain functions, not store queries.

use dokvault_entity::document::{DocumentKind, DocumentVersion};

/// Equality filters for the browse view. `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    /// Restrict to one document type.
    pub dokumentart: Option<DocumentKind>,
    /// Restrict to one manufacturer.
    pub hersteller: Option<String>,
    /// Restrict to one parent/category reference.
    pub gehoert_zu: Option<String>,
}

impl DocumentFilter {
    /// Whether a record passes every set filter.
    pub fn matches(&self, doc: &DocumentVersion) -> bool {
        if let Some(kind) = self.dokumentart
            && doc.dokumentart != kind
        {
            return false;
        }
        if let Some(hersteller) = &self.hersteller
            && doc.hersteller != *hersteller
        {
            return false;
        }
        if let Some(gehoert_zu) = &self.gehoert_zu
            && doc.gehoert_zu.as_deref() != Some(gehoert_zu.as_str())
        {
            return false;
        }
        true
    }

    /// Keep only the records passing every set filter.
    pub fn apply(&self, records: &[DocumentVersion]) -> Vec<DocumentVersion> {
        records
            .iter()
            .filter(|doc| self.matches(doc))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring search over the descriptive fields. An
/// empty term keeps everything.
pub fn search(records: &[DocumentVersion], term: &str) -> Vec<DocumentVersion> {
    if term.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|doc| doc.matches_search(term))
        .cloned()
        .collect()
}

/// Sorted unique non-empty values of a field, for filter dropdowns.
pub fn distinct_values<F>(records: &[DocumentVersion], field: F) -> Vec<String>
where
    F: Fn(&DocumentVersion) -> Option<&str>,
{
    let mut values: Vec<String> = records
        .iter()
        .filter_map(|doc| field(doc))
        .filter(|value| !value.is_empty())
        .map(String::from)
        .collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::test_support::version;

    #[test]
    fn test_filter_matches_all_when_unset() {
        let records = vec![version("a.pdf", 1), version("b.pdf", 1)];
        assert_eq!(DocumentFilter::default().apply(&records).len(), 2);
    }

    #[test]
    fn test_filter_by_hersteller() {
        let mut other = version("b.pdf", 1);
        other.hersteller = "Widgets GmbH".to_string();
        let records = vec![version("a.pdf", 1), other];

        let filter = DocumentFilter {
            hersteller: Some("Widgets GmbH".to_string()),
            ..Default::default()
        };
        let kept = filter.apply(&records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].file_name, "b.pdf");
    }

    #[test]
    fn test_search_hits_any_descriptive_field() {
        let mut doc = version("a.pdf", 1);
        doc.produkt = "Kompressor K5".to_string();
        let records = vec![doc, version("b.pdf", 1)];

        assert_eq!(search(&records, "kompressor").len(), 1);
        assert_eq!(search(&records, "").len(), 2);
        assert!(search(&records, "nope").is_empty());
    }

    #[test]
    fn test_distinct_values_are_sorted_and_deduped() {
        let mut a = version("a.pdf", 1);
        a.hersteller = "Zeta".to_string();
        let b = version("b.pdf", 1);
        let c = version("c.pdf", 1);
        let values = distinct_values(&[a, b, c], |doc| Some(doc.hersteller.as_str()));
        assert_eq!(values, vec!["Acme", "Zeta"]);
    }
}
