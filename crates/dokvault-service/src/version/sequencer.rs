//! Version sequencer.
//!
//! Computes the version number and metadata source for a new record and
//! assembles the fully populated draft.

use chrono::NaiveDate;

use dokvault_core::{AppError, AppResult};
use dokvault_entity::document::{DocumentMetadata, DocumentVersion, NewDocumentVersion};

/// The file picked for upload, as seen before the blob transfer.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// File name as picked, including extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// File content.
    pub data: bytes::Bytes,
}

impl SelectedFile {
    /// Create a selected file from a name and content bytes.
    pub fn new(name: impl Into<String>, data: impl Into<bytes::Bytes>) -> Self {
        let data = data.into();
        Self {
            name: name.into(),
            size: data.len() as u64,
            data,
        }
    }
}

/// Where the descriptive fields of the new version come from.
#[derive(Debug, Clone, Copy)]
pub enum MetadataSource<'a> {
    /// Freshly entered form metadata. All required fields must be present.
    Fresh(&'a DocumentMetadata),
    /// Copy the descriptive fields verbatim from the reference record;
    /// only `datum` is reset to the creation date. Used when the user has
    /// confirmed continuing an existing family from a filename conflict.
    Inherit,
}

/// The version number a new record receives: one past the reference when
/// continuing a family, otherwise 1.
pub fn next_version(reference: Option<&DocumentVersion>) -> u32 {
    match reference {
        Some(reference) => reference.version_number + 1,
        None => 1,
    }
}

/// Assemble the draft for a new version record.
///
/// `file_name` is always the reference record's when continuing a family,
/// even if the uploaded file's name differs stylistically; otherwise the
/// uploaded file's name. `today` becomes the draft's `datum` on the
/// inherit path.
pub fn build_draft(
    reference: Option<&DocumentVersion>,
    source: MetadataSource<'_>,
    file: &SelectedFile,
    file_url: &str,
    created_by: &str,
    today: NaiveDate,
) -> AppResult<NewDocumentVersion> {
    let file_name = match reference {
        Some(reference) => reference.file_name.clone(),
        None => file.name.clone(),
    };

    let (name, hersteller, produkt, gehoert_zu, dokumentart, datum) = match source {
        MetadataSource::Inherit => {
            let reference = reference.ok_or_else(|| {
                AppError::internal("inherit metadata requested without a reference record")
            })?;
            (
                reference.name.clone(),
                reference.hersteller.clone(),
                reference.produkt.clone(),
                reference.gehoert_zu.clone(),
                reference.dokumentart,
                today,
            )
        }
        MetadataSource::Fresh(metadata) => {
            metadata.ensure_complete()?;
            let dokumentart = metadata
                .dokumentart
                .ok_or_else(|| AppError::validation("dokumentart is required"))?;
            let datum = metadata
                .datum
                .ok_or_else(|| AppError::validation("datum is required"))?;
            (
                metadata.name.clone(),
                metadata.hersteller.clone(),
                metadata.produkt.clone(),
                metadata.gehoert_zu.clone(),
                dokumentart,
                datum,
            )
        }
    };

    Ok(NewDocumentVersion {
        file_name,
        version_number: next_version(reference),
        name,
        hersteller,
        produkt,
        gehoert_zu,
        dokumentart,
        datum,
        file_url: file_url.to_string(),
        file_size: file.size,
        created_by: created_by.to_string(),
    })
}
