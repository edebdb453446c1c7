//! In-memory document record store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use dokvault_core::traits::RecordStore;
use dokvault_core::types::filter::{DocumentField, FieldFilter};
use dokvault_core::{AppError, AppResult};
use dokvault_entity::document::{DocumentUpdate, DocumentVersion, NewDocumentVersion};

/// [`RecordStore`] over a shared in-memory vector of records.
///
/// Cloning yields a handle onto the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    records: Arc<RwLock<Vec<DocumentVersion>>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records (tests).
    pub async fn seed(&self, records: impl IntoIterator<Item = DocumentVersion>) {
        self.records.write().await.extend(records);
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn matches(doc: &DocumentVersion, filter: &FieldFilter) -> bool {
        match filter.field {
            DocumentField::FileName => doc.file_name == filter.value,
            DocumentField::Name => doc.name == filter.value,
            DocumentField::Hersteller => doc.hersteller == filter.value,
            DocumentField::Produkt => doc.produkt == filter.value,
            DocumentField::GehoertZu => doc.gehoert_zu.as_deref() == Some(filter.value.as_str()),
            DocumentField::Dokumentart => doc.dokumentart.as_str() == filter.value,
        }
    }
}

#[async_trait]
impl RecordStore<DocumentVersion, NewDocumentVersion, DocumentUpdate> for InMemoryDocumentStore {
    async fn list(&self) -> AppResult<Vec<DocumentVersion>> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> AppResult<DocumentVersion> {
        self.records
            .read()
            .await
            .iter()
            .find(|doc| doc.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("document {id} not found")))
    }

    async fn filter(&self, filters: &[FieldFilter]) -> AppResult<Vec<DocumentVersion>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|doc| filters.iter().all(|f| Self::matches(doc, f)))
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &NewDocumentVersion) -> AppResult<DocumentVersion> {
        let now = Utc::now();
        let doc = DocumentVersion {
            id: Uuid::new_v4(),
            file_name: draft.file_name.clone(),
            version_number: draft.version_number,
            name: draft.name.clone(),
            hersteller: draft.hersteller.clone(),
            produkt: draft.produkt.clone(),
            gehoert_zu: draft.gehoert_zu.clone(),
            dokumentart: draft.dokumentart,
            datum: draft.datum,
            file_url: draft.file_url.clone(),
            file_size: draft.file_size,
            created_date: now,
            updated_date: now,
            created_by: draft.created_by.clone(),
        };
        self.records.write().await.push(doc.clone());
        Ok(doc)
    }

    async fn update(&self, id: Uuid, fields: &DocumentUpdate) -> AppResult<DocumentVersion> {
        let mut records = self.records.write().await;
        let doc = records
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| AppError::not_found(format!("document {id} not found")))?;
        fields.apply_to(doc);
        doc.updated_date = Utc::now();
        Ok(doc.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|doc| doc.id != id);
        if records.len() == before {
            return Err(AppError::not_found(format!("document {id} not found")));
        }
        Ok(())
    }
}
