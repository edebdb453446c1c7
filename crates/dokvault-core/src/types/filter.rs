//! Field filters for querying the remote entity store.
//!
//! The entity API supports equality filters on named fields. Filters are
//! expressed against an explicit field enum rather than free-form strings
//! so that a typo in a field name is a compile error, not an empty result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A filterable field of the document version entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentField {
    /// The versioning key shared by all versions of one logical document.
    FileName,
    /// Display name.
    Name,
    /// Manufacturer.
    Hersteller,
    /// Product.
    Produkt,
    /// Optional parent/category reference.
    GehoertZu,
    /// Document type.
    Dokumentart,
}

impl DocumentField {
    /// The wire name of this field in the entity API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileName => "file_name",
            Self::Name => "name",
            Self::Hersteller => "hersteller",
            Self::Produkt => "produkt",
            Self::GehoertZu => "gehoert_zu",
            Self::Dokumentart => "dokumentart",
        }
    }
}

impl fmt::Display for DocumentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single equality filter condition on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    /// The field to filter on.
    pub field: DocumentField,
    /// The value the field must equal.
    pub value: String,
}

impl FieldFilter {
    /// Create a new equality filter.
    pub fn eq(field: DocumentField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Shorthand for the most common filter: match a document family.
    pub fn file_name(value: impl Into<String>) -> Self {
        Self::eq(DocumentField::FileName, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(DocumentField::FileName.as_str(), "file_name");
        assert_eq!(DocumentField::GehoertZu.as_str(), "gehoert_zu");
    }

    #[test]
    fn test_file_name_shorthand() {
        let filter = FieldFilter::file_name("manual.pdf");
        assert_eq!(filter.field, DocumentField::FileName);
        assert_eq!(filter.value, "manual.pdf");
    }
}
