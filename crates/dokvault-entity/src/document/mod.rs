//! Document domain entities.

pub mod kind;
pub mod metadata;
pub mod model;
pub mod update;

pub use kind::DocumentKind;
pub use metadata::DocumentMetadata;
pub use model::{DocumentVersion, NewDocumentVersion};
pub use update::DocumentUpdate;

use dokvault_core::traits::RecordStore;

/// Strongly typed record store over the document version collection.
pub trait DocumentStore: RecordStore<DocumentVersion, NewDocumentVersion, DocumentUpdate> {}

impl<T> DocumentStore for T where
    T: RecordStore<DocumentVersion, NewDocumentVersion, DocumentUpdate>
{
}
