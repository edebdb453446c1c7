//! Latest-version projector.
//!
//! Reduces the full flat set of version records to one representative per
//! document family for list views. Pure and stateless; recomputed on every
//! load because the source is always re-fetched in full.

use std::collections::BTreeMap;

use dokvault_core::AppResult;
use dokvault_entity::document::DocumentVersion;

use super::resolver::{VersionResolution, resolve};

/// Group records into families keyed by `file_name`, each family ordered
/// by ascending version number.
pub fn group_by_family(records: &[DocumentVersion]) -> BTreeMap<String, Vec<DocumentVersion>> {
    let mut families: BTreeMap<String, Vec<DocumentVersion>> = BTreeMap::new();
    for record in records {
        families
            .entry(record.file_name.clone())
            .or_default()
            .push(record.clone());
    }
    for family in families.values_mut() {
        family.sort_by_key(|doc| doc.version_number);
    }
    families
}

/// Keep only the current (highest-numbered) version of each family,
/// ordered by `updated_date` descending (most recently touched family
/// first). A family holding two records with the same maximum version
/// number is rejected as a data-integrity error.
pub fn latest_versions(records: &[DocumentVersion]) -> AppResult<Vec<DocumentVersion>> {
    let mut latest = Vec::new();
    for file_name in group_by_family(records).keys() {
        if let VersionResolution::ExistingFamily(current) = resolve(file_name, records)? {
            latest.push(current);
        }
    }
    latest.sort_by(|a, b| b.updated_date.cmp(&a.updated_date));
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::test_support::version;
    use chrono::{Duration, Utc};

    #[test]
    fn test_grouping_orders_versions_ascending() {
        let records = vec![
            version("a.pdf", 3),
            version("b.pdf", 1),
            version("a.pdf", 1),
            version("a.pdf", 2),
        ];
        let families = group_by_family(&records);
        assert_eq!(families.len(), 2);
        let numbers: Vec<u32> = families["a.pdf"].iter().map(|d| d.version_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_projection_keeps_only_family_maximum() {
        let records = vec![
            version("a.pdf", 1),
            version("a.pdf", 3),
            version("a.pdf", 2),
        ];
        let latest = latest_versions(&records).expect("project");
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].version_number, 3);
    }

    #[test]
    fn test_projection_has_no_duplicate_family_keys() {
        let records = vec![
            version("a.pdf", 1),
            version("a.pdf", 2),
            version("b.pdf", 1),
            version("c.pdf", 4),
            version("c.pdf", 5),
        ];
        let latest = latest_versions(&records).expect("project");
        let mut names: Vec<&str> = latest.iter().map(|d| d.file_name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_projection_orders_by_updated_date_descending() {
        let now = Utc::now();
        let mut old = version("old.pdf", 1);
        old.updated_date = now - Duration::days(3);
        let mut fresh = version("fresh.pdf", 1);
        fresh.updated_date = now;
        let mut middle = version("middle.pdf", 1);
        middle.updated_date = now - Duration::days(1);

        let latest = latest_versions(&[old, fresh, middle]).expect("project");
        let names: Vec<&str> = latest.iter().map(|d| d.file_name.as_str()).collect();
        assert_eq!(names, vec!["fresh.pdf", "middle.pdf", "old.pdf"]);
    }

    #[test]
    fn test_duplicate_family_maximum_is_rejected() {
        let records = vec![version("a.pdf", 2), version("a.pdf", 2)];
        assert!(latest_versions(&records).is_err());
    }
}
