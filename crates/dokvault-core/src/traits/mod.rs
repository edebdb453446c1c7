//! Collaborator traits consumed by the service layer.
//!
//! The traits are defined here in `dokvault-core` and implemented in
//! `dokvault-store`; services depend only on the trait objects.

pub mod blob_store;
pub mod current_user;
pub mod record_store;

pub use blob_store::{BlobStore, UploadedBlob};
pub use current_user::{CurrentUser, CurrentUserProvider};
pub use record_store::RecordStore;
