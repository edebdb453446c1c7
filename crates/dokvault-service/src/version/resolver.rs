//! Version identity resolver.
//!
//! Decides whether an incoming upload continues an existing document
//! family (keyed by `file_name`) or starts a new one.

use dokvault_core::{AppError, AppResult};
use dokvault_entity::document::DocumentVersion;

/// Outcome of resolving a candidate filename against the existing records.
#[derive(Debug, Clone)]
pub enum VersionResolution {
    /// No family with this filename exists yet.
    NewFamily,
    /// The filename matches an existing family; the carried record is the
    /// family's current (highest-numbered) version.
    ExistingFamily(DocumentVersion),
}

impl VersionResolution {
    /// The reference record, when an existing family was matched.
    pub fn reference(&self) -> Option<&DocumentVersion> {
        match self {
            Self::NewFamily => None,
            Self::ExistingFamily(reference) => Some(reference),
        }
    }
}

/// Resolve a candidate filename against the full set of existing records.
///
/// Pure query, no side effects. Two family members claiming the same
/// maximum version number violate the uniqueness invariant and are
/// rejected as a data-integrity error instead of being resolved by
/// sort order.
pub fn resolve(file_name: &str, existing: &[DocumentVersion]) -> AppResult<VersionResolution> {
    let mut family: Vec<&DocumentVersion> = existing
        .iter()
        .filter(|doc| doc.file_name == file_name)
        .collect();

    let Some(max) = family.iter().map(|doc| doc.version_number).max() else {
        return Ok(VersionResolution::NewFamily);
    };

    family.retain(|doc| doc.version_number == max);
    if family.len() > 1 {
        return Err(AppError::integrity(format!(
            "family '{file_name}' has {} records with version number {max}",
            family.len()
        )));
    }

    Ok(VersionResolution::ExistingFamily(family[0].clone()))
}
