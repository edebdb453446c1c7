//! The version resolution engine.
//!
//! Pure, synchronous functions over already-fetched version records:
//! deciding whether an upload continues an existing document family,
//! assigning the next version number and metadata source, projecting the
//! latest version per family, and comparing two versions field by field.

#[cfg(test)]
pub(crate) mod test_support;

pub mod compare;
pub mod projector;
pub mod resolver;
pub mod sequencer;

pub use compare::{FieldDiff, VersionComparison, compare};
pub use projector::{group_by_family, latest_versions};
pub use resolver::{VersionResolution, resolve};
pub use sequencer::{MetadataSource, SelectedFile, build_draft, next_version};
