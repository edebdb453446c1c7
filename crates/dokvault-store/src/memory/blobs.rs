//! In-memory blob store.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use dokvault_core::traits::{BlobStore, UploadedBlob};
use dokvault_core::{AppError, AppResult};

/// [`BlobStore`] that fabricates a `memory://` URL per upload.
///
/// Counts uploads and can be switched into a failing mode so tests can
/// assert exactly when the upload collaborator is reached.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    uploads: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

impl InMemoryBlobStore {
    /// Create a blob store that accepts every upload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of upload calls received, including failed ones.
    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    /// Make subsequent uploads fail with a store error.
    pub fn fail_uploads(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn upload(&self, _data: Bytes, file_name: &str) -> AppResult<UploadedBlob> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::store("blob upload failed"));
        }
        Ok(UploadedBlob {
            file_url: format!("memory://{file_name}"),
        })
    }
}
