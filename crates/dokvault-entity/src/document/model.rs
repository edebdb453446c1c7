//! Document version entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kind::DocumentKind;

/// One version record of a logical document.
///
/// All versions sharing one `file_name` form a *family*; the family member
/// with the highest `version_number` is the current version. A record is
/// created once per upload and never re-created; editing mutates the
/// descriptive fields of a single record in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentVersion {
    /// Unique record identifier, assigned by the store at creation.
    pub id: Uuid,
    /// The versioning key. All versions of one logical document share it.
    pub file_name: String,
    /// Sequential version number, starting at 1 within a family.
    pub version_number: u32,
    /// Display name.
    pub name: String,
    /// Manufacturer.
    pub hersteller: String,
    /// Product.
    pub produkt: String,
    /// Optional parent/category reference.
    pub gehoert_zu: Option<String>,
    /// Document type.
    pub dokumentart: DocumentKind,
    /// Business date associated with the document content.
    pub datum: NaiveDate,
    /// Public URL of the stored file.
    pub file_url: String,
    /// File size in bytes.
    pub file_size: u64,
    /// When the record was created.
    pub created_date: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_date: DateTime<Utc>,
    /// Full name of the user who created this version.
    pub created_by: String,
}

impl DocumentVersion {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.file_name)
            .map(|ext| ext.to_lowercase())
    }

    /// Case-insensitive substring match over the searchable descriptive
    /// fields (name, hersteller, produkt, gehoert_zu).
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.hersteller.to_lowercase().contains(&term)
            || self.produkt.to_lowercase().contains(&term)
            || self
                .gehoert_zu
                .as_deref()
                .is_some_and(|g| g.to_lowercase().contains(&term))
    }
}

/// A fully populated draft for a new version record, lacking only the
/// server-assigned `id` and audit timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocumentVersion {
    /// The versioning key for the family this version joins or starts.
    pub file_name: String,
    /// The assigned version number.
    pub version_number: u32,
    /// Display name.
    pub name: String,
    /// Manufacturer.
    pub hersteller: String,
    /// Product.
    pub produkt: String,
    /// Optional parent/category reference.
    pub gehoert_zu: Option<String>,
    /// Document type.
    pub dokumentart: DocumentKind,
    /// Business date.
    pub datum: NaiveDate,
    /// Public URL of the uploaded file.
    pub file_url: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Full name of the uploading user.
    pub created_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(file_name: &str) -> DocumentVersion {
        DocumentVersion {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            version_number: 1,
            name: "Bedienungsanleitung".to_string(),
            hersteller: "Acme".to_string(),
            produkt: "Pumpe X200".to_string(),
            gehoert_zu: Some("Serie X".to_string()),
            dokumentart: DocumentKind::Handbuch,
            datum: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            file_url: "https://blobs.example/manual.pdf".to_string(),
            file_size: 1024,
            created_date: Utc::now(),
            updated_date: Utc::now(),
            created_by: "Max Mustermann".to_string(),
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(version("Manual.PDF").extension().as_deref(), Some("pdf"));
        assert_eq!(version("no_extension").extension(), None);
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let doc = version("manual.pdf");
        assert!(doc.matches_search("acme"));
        assert!(doc.matches_search("x200"));
        assert!(doc.matches_search("serie"));
        assert!(!doc.matches_search("widget"));
    }
}
