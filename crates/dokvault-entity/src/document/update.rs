//! Sparse partial-update record for a document version.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::kind::DocumentKind;
use super::model::DocumentVersion;

/// A sparse update: only fields that are `Some` are applied.
///
/// This replaces runtime field-presence probing with a typed mapping —
/// bulk edit builds one of these from the checked form fields and every
/// selected record receives the same present entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hersteller: Option<String>,
    /// New product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produkt: Option<String>,
    /// New parent/category reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gehoert_zu: Option<String>,
    /// New document type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dokumentart: Option<DocumentKind>,
    /// New business date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datum: Option<NaiveDate>,
}

impl DocumentUpdate {
    /// Whether no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.hersteller.is_none()
            && self.produkt.is_none()
            && self.gehoert_zu.is_none()
            && self.dokumentart.is_none()
            && self.datum.is_none()
    }

    /// Apply the present fields to a record in place.
    pub fn apply_to(&self, doc: &mut DocumentVersion) {
        if let Some(name) = &self.name {
            doc.name = name.clone();
        }
        if let Some(hersteller) = &self.hersteller {
            doc.hersteller = hersteller.clone();
        }
        if let Some(produkt) = &self.produkt {
            doc.produkt = produkt.clone();
        }
        if let Some(gehoert_zu) = &self.gehoert_zu {
            doc.gehoert_zu = Some(gehoert_zu.clone());
        }
        if let Some(dokumentart) = self.dokumentart {
            doc.dokumentart = dokumentart;
        }
        if let Some(datum) = self.datum {
            doc.datum = datum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_serializes_to_empty_object() {
        let update = DocumentUpdate::default();
        assert!(update.is_empty());
        let json = serde_json::to_string(&update).expect("serialize");
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_only_present_fields_serialize() {
        let update = DocumentUpdate {
            hersteller: Some("Acme".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).expect("serialize");
        assert_eq!(json, "{\"hersteller\":\"Acme\"}");
    }
}
