//! REST implementations of the collaborator traits.
//!
//! All three collaborators speak the same bearer-token JSON entity API,
//! sharing one [`EntityClient`].

pub mod blobs;
pub mod client;
pub mod documents;
pub mod user;

pub use blobs::RestBlobStore;
pub use client::EntityClient;
pub use documents::RestDocumentStore;
pub use user::RestUserProvider;
