//! User-entered document metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use dokvault_core::AppError;

use super::kind::DocumentKind;

/// The descriptive fields entered in the upload form.
///
/// Every field except `gehoert_zu` is required; a missing or empty field
/// is a validation failure raised before any store call, never silently
/// defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DocumentMetadata {
    /// Display name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Manufacturer.
    #[validate(length(min = 1, message = "hersteller is required"))]
    pub hersteller: String,
    /// Product.
    #[validate(length(min = 1, message = "produkt is required"))]
    pub produkt: String,
    /// Optional parent/category reference.
    pub gehoert_zu: Option<String>,
    /// Document type. `None` when the user has not selected one yet.
    #[validate(required(message = "dokumentart is required"))]
    pub dokumentart: Option<DocumentKind>,
    /// Business date. `None` when the user has cleared the prefilled value.
    #[validate(required(message = "datum is required"))]
    pub datum: Option<NaiveDate>,
}

impl DocumentMetadata {
    /// Validate that all required fields are present and non-empty.
    pub fn ensure_complete(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|e| AppError::validation(format!("incomplete document metadata: {e}")))
    }
}
