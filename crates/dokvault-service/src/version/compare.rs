//! Version comparator.
//!
//! Pairwise diff of two version records' display fields. Records are
//! ordered left = lower version number, right = higher, regardless of
//! argument order, so `compare([a, b])` and `compare([b, a])` agree.

use dokvault_core::{AppError, AppResult};
use dokvault_entity::document::DocumentVersion;

/// One compared field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldDiff {
    /// Display label of the field.
    pub label: &'static str,
    /// Rendered value of the older (left) version.
    pub left: String,
    /// Rendered value of the newer (right) version.
    pub right: String,
    /// Whether the rendered values differ.
    pub differs: bool,
}

/// The full comparison of two versions of one document.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VersionComparison {
    /// Version number shown on the left (the lower one).
    pub left_version: u32,
    /// Version number shown on the right (the higher one).
    pub right_version: u32,
    /// One entry per tracked field, in display order.
    pub fields: Vec<FieldDiff>,
}

/// Compare exactly two version records.
///
/// Fails with a validation error for any other input count.
pub fn compare(versions: &[DocumentVersion]) -> AppResult<VersionComparison> {
    let [a, b] = versions else {
        return Err(AppError::validation(format!(
            "version comparison requires exactly 2 records, got {}",
            versions.len()
        )));
    };

    let (left, right) = if a.version_number <= b.version_number {
        (a, b)
    } else {
        (b, a)
    };

    let fields = TRACKED_FIELDS
        .iter()
        .copied()
        .map(|(label, render)| {
            let left_value = render(left);
            let right_value = render(right);
            let differs = left_value != right_value;
            FieldDiff {
                label,
                left: left_value,
                right: right_value,
                differs,
            }
        })
        .collect();

    Ok(VersionComparison {
        left_version: left.version_number,
        right_version: right.version_number,
        fields,
    })
}

type Render = fn(&DocumentVersion) -> String;

const TRACKED_FIELDS: [(&str, Render); 8] = [
    ("Name", |doc| doc.name.clone()),
    ("Hersteller", |doc| doc.hersteller.clone()),
    ("Produkt", |doc| doc.produkt.clone()),
    ("Dokumentart", |doc| doc.dokumentart.to_string()),
    ("Datum", |doc| doc.datum.format("%d.%m.%Y").to_string()),
    ("Dateigröße", |doc| format_file_size(doc.file_size)),
    ("Erstellt am", |doc| {
        doc.created_date.format("%d.%m.%Y %H:%M").to_string()
    }),
    ("Erstellt von", |doc| doc.created_by.clone()),
];

/// Render a byte count with binary units, two decimals, trailing zeros
/// trimmed. Zero renders as `N/A` (the record predates size tracking).
fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "N/A".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let mut rendered = format!("{value:.2}");
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }
    format!("{rendered} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::test_support::version;

    #[test]
    fn test_requires_exactly_two_records() {
        assert!(compare(&[]).is_err());
        assert!(compare(&[version("a.pdf", 1)]).is_err());
        assert!(
            compare(&[
                version("a.pdf", 1),
                version("a.pdf", 2),
                version("a.pdf", 3)
            ])
            .is_err()
        );
    }

    #[test]
    fn test_order_independent() {
        let mut v1 = version("a.pdf", 1);
        v1.hersteller = "Acme".to_string();
        let mut v2 = version("a.pdf", 2);
        v2.hersteller = "Widgets GmbH".to_string();

        let forward = compare(&[v1.clone(), v2.clone()]).expect("compare");
        let backward = compare(&[v2, v1]).expect("compare");

        assert_eq!(forward.left_version, 1);
        assert_eq!(forward.right_version, 2);
        assert_eq!(forward.fields, backward.fields);

        let hersteller = forward
            .fields
            .iter()
            .find(|f| f.label == "Hersteller")
            .expect("tracked field");
        assert_eq!(hersteller.left, "Acme");
        assert_eq!(hersteller.right, "Widgets GmbH");
        assert!(hersteller.differs);
    }

    #[test]
    fn test_identical_fields_do_not_differ() {
        let v1 = version("a.pdf", 1);
        let mut v2 = version("a.pdf", 2);
        v2.created_date = v1.created_date;
        let comparison = compare(&[v1, v2]).expect("compare");
        assert!(comparison.fields.iter().all(|f| !f.differs));
    }

    #[test]
    fn test_file_size_rendering() {
        assert_eq!(format_file_size(0), "N/A");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
    }
}
