//! REST record store for the document version collection.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use dokvault_core::AppResult;
use dokvault_core::traits::RecordStore;
use dokvault_core::types::filter::FieldFilter;
use dokvault_entity::document::{DocumentUpdate, DocumentVersion, NewDocumentVersion};

use super::client::EntityClient;

const COLLECTION: &str = "entities/documents";

/// [`RecordStore`] backed by the remote entity API.
#[derive(Debug, Clone)]
pub struct RestDocumentStore {
    client: EntityClient,
}

impl RestDocumentStore {
    /// Create a store over an existing client.
    pub fn new(client: EntityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordStore<DocumentVersion, NewDocumentVersion, DocumentUpdate> for RestDocumentStore {
    async fn list(&self) -> AppResult<Vec<DocumentVersion>> {
        self.client
            .send_json(self.client.get(COLLECTION), "list documents")
            .await
    }

    async fn get(&self, id: Uuid) -> AppResult<DocumentVersion> {
        self.client
            .send_json(
                self.client.get(&format!("{COLLECTION}/{id}")),
                "get document",
            )
            .await
    }

    async fn filter(&self, filters: &[FieldFilter]) -> AppResult<Vec<DocumentVersion>> {
        let query: Vec<(&str, &str)> = filters
            .iter()
            .map(|f| (f.field.as_str(), f.value.as_str()))
            .collect();
        debug!(filters = filters.len(), "filtering documents");
        self.client
            .send_json(
                self.client.get(COLLECTION).query(&query),
                "filter documents",
            )
            .await
    }

    async fn create(&self, draft: &NewDocumentVersion) -> AppResult<DocumentVersion> {
        self.client
            .send_json(
                self.client.post(COLLECTION).json(draft),
                "create document",
            )
            .await
    }

    async fn update(&self, id: Uuid, fields: &DocumentUpdate) -> AppResult<DocumentVersion> {
        self.client
            .send_json(
                self.client.patch(&format!("{COLLECTION}/{id}")).json(fields),
                "update document",
            )
            .await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.client
            .send_unit(
                self.client.delete(&format!("{COLLECTION}/{id}")),
                "delete document",
            )
            .await
    }
}
