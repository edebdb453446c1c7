//! In-memory implementations of the collaborator traits.
//!
//! Used by the test suites and as a stand-in store for local development.
//! Behavior mirrors the remote entity API: server-assigned ids and audit
//! timestamps on create, sparse updates, not-found on missing ids.

pub mod blobs;
pub mod documents;
pub mod user;

pub use blobs::InMemoryBlobStore;
pub use documents::InMemoryDocumentStore;
pub use user::StaticUserProvider;
