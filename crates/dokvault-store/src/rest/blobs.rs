//! REST blob upload integration.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::info;

use dokvault_core::AppResult;
use dokvault_core::traits::{BlobStore, UploadedBlob};

use super::client::EntityClient;

/// [`BlobStore`] that posts file bytes to the upload integration endpoint.
#[derive(Debug, Clone)]
pub struct RestBlobStore {
    client: EntityClient,
}

impl RestBlobStore {
    /// Create a blob store over an existing client.
    pub fn new(client: EntityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BlobStore for RestBlobStore {
    async fn upload(&self, data: Bytes, file_name: &str) -> AppResult<UploadedBlob> {
        let size = data.len();
        let blob: UploadedBlob = self
            .client
            .send_json(
                self.client
                    .post("integrations/upload")
                    .query(&[("file_name", file_name)])
                    .header("content-type", "application/octet-stream")
                    .body(data),
                "upload file",
            )
            .await?;

        info!(file_name, size, url = %blob.file_url, "File uploaded");
        Ok(blob)
    }
}
