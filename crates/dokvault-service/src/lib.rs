//! # dokvault-service
//!
//! Business logic for DokVault: the version resolution engine (identity
//! resolver, sequencer, latest-version projector, comparator), the upload
//! flow, and the document/bulk services orchestrating the collaborators.

pub mod document;
pub mod upload;
pub mod version;
