//! Blob upload trait for the external file-storage collaborator.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Result of a successful blob upload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UploadedBlob {
    /// Public URL of the stored file.
    pub file_url: String,
}

/// Trait for the external blob-upload collaborator.
///
/// The upload endpoint is assumed idempotent-safe for retry, but no retry
/// is implemented here — a failed upload surfaces to the caller, who must
/// re-initiate the whole upload manually.
#[async_trait]
pub trait BlobStore: Send + Sync + 'static {
    /// Upload the file bytes and return the stored blob's URL.
    async fn upload(&self, data: Bytes, file_name: &str) -> AppResult<UploadedBlob>;
}
