//! Upload flow: conflict detection, user decision, blob transfer, and
//! record creation.

pub mod flow;
pub mod service;

pub use flow::{UploadFlow, UploadState};
pub use service::{NewVersionSeed, UploadOutcome, UploadService};
