//! Builders for version records used across the engine's unit tests.

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use dokvault_entity::document::{DocumentKind, DocumentVersion};

/// A version record with fixed descriptive fields.
pub fn version(file_name: &str, version_number: u32) -> DocumentVersion {
    DocumentVersion {
        id: Uuid::new_v4(),
        file_name: file_name.to_string(),
        version_number,
        name: "Handbuch X200".to_string(),
        hersteller: "Acme".to_string(),
        produkt: "X200".to_string(),
        gehoert_zu: Some("Serie X".to_string()),
        dokumentart: DocumentKind::Handbuch,
        datum: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
        file_url: format!("memory://{file_name}/{version_number}"),
        file_size: 2048,
        created_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().expect("valid"),
        updated_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().expect("valid"),
        created_by: "Max Mustermann".to_string(),
    }
}
