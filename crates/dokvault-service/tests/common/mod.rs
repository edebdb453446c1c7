//! Shared test fixtures: services wired to the in-memory collaborators.

use std::sync::Arc;

use chrono::NaiveDate;

use dokvault_core::config::upload::UploadConfig;
use dokvault_entity::document::{DocumentKind, DocumentMetadata};
use dokvault_service::document::{BulkService, DocumentService};
use dokvault_service::upload::UploadService;
use dokvault_store::memory::{InMemoryBlobStore, InMemoryDocumentStore, StaticUserProvider};

/// Everything a test needs, wired to one shared in-memory store.
pub struct TestContext {
    pub store: InMemoryDocumentStore,
    pub blobs: InMemoryBlobStore,
    pub uploads: UploadService,
    pub documents: DocumentService,
    pub bulk: BulkService,
}

impl TestContext {
    pub fn new() -> Self {
        let store = InMemoryDocumentStore::new();
        let blobs = InMemoryBlobStore::new();
        let users = StaticUserProvider::signed_in("Erika Musterfrau");

        let uploads = UploadService::new(
            Arc::new(store.clone()),
            Arc::new(blobs.clone()),
            Arc::new(users),
            UploadConfig::default(),
        );
        let documents = DocumentService::new(Arc::new(store.clone()));
        let bulk = BulkService::new(Arc::new(store.clone()));

        Self {
            store,
            blobs,
            uploads,
            documents,
            bulk,
        }
    }
}

/// Complete form metadata for a fresh upload.
pub fn metadata(name: &str, hersteller: &str) -> DocumentMetadata {
    DocumentMetadata {
        name: name.to_string(),
        hersteller: hersteller.to_string(),
        produkt: "X200".to_string(),
        gehoert_zu: None,
        dokumentart: Some(DocumentKind::Handbuch),
        datum: NaiveDate::from_ymd_opt(2024, 3, 1),
    }
}
