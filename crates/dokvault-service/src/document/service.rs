//! Document service — browse, version history, edit, delete.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use dokvault_core::types::filter::FieldFilter;
use dokvault_core::{AppError, AppResult};
use dokvault_entity::document::{DocumentStore, DocumentUpdate, DocumentVersion};

use crate::version::projector::latest_versions;

/// Read and single-record write operations over the document collection.
#[derive(Clone)]
pub struct DocumentService {
    /// Document record store.
    store: Arc<dyn DocumentStore>,
}

impl std::fmt::Debug for DocumentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentService").finish()
    }
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// The family-level browse list: one record per family (its current
    /// version), most recently touched family first. Re-fetches the full
    /// collection and re-projects on every call.
    pub async fn list_latest(&self) -> AppResult<Vec<DocumentVersion>> {
        let records = self.store.list().await?;
        latest_versions(&records)
    }

    /// Fetch one version record.
    pub async fn get(&self, id: Uuid) -> AppResult<DocumentVersion> {
        self.store.get(id).await
    }

    /// Full version history of one family, newest version first.
    pub async fn family_history(&self, file_name: &str) -> AppResult<Vec<DocumentVersion>> {
        let mut versions = self
            .store
            .filter(&[FieldFilter::file_name(file_name)])
            .await?;
        versions.sort_by(|a, b| b.version_number.cmp(&a.version_number));
        Ok(versions)
    }

    /// Apply a sparse edit to one record's descriptive fields in place.
    pub async fn update(&self, id: Uuid, fields: &DocumentUpdate) -> AppResult<DocumentVersion> {
        if fields.is_empty() {
            return Err(AppError::validation("no fields to update"));
        }
        let document = self.store.update(id, fields).await?;
        info!(id = %id, "Document updated");
        Ok(document)
    }

    /// Delete one version record. Other versions of the family are
    /// untouched — there is no cascading family delete.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.delete(id).await?;
        info!(id = %id, "Document deleted");
        Ok(())
    }
}
