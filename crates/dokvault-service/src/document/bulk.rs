//! Bulk edit and delete across multiple selected records.

use std::sync::Arc;

use futures::future::join_all;
use tracing::info;
use uuid::Uuid;

use dokvault_core::{AppError, AppResult};
use dokvault_entity::document::{DocumentStore, DocumentUpdate, DocumentVersion};

/// Applies one operation per selected record, all requests in flight
/// concurrently, and waits for every one to finish.
///
/// A batch is not atomic: one rejected member surfaces as a batch
/// failure, and members that already succeeded are not rolled back.
/// There is no cancellation and no local timeout.
#[derive(Clone)]
pub struct BulkService {
    /// Document record store.
    store: Arc<dyn DocumentStore>,
}

impl std::fmt::Debug for BulkService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BulkService").finish()
    }
}

impl BulkService {
    /// Creates a new bulk service.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Apply the same sparse update to every selected record.
    pub async fn bulk_update(
        &self,
        ids: &[Uuid],
        fields: &DocumentUpdate,
    ) -> AppResult<Vec<DocumentVersion>> {
        if fields.is_empty() {
            return Err(AppError::validation("no fields to update"));
        }
        let results = join_all(ids.iter().map(|id| self.store.update(*id, fields))).await;
        let updated = settle(results)?;
        info!(count = updated.len(), "Bulk update applied");
        Ok(updated)
    }

    /// Delete every selected record.
    pub async fn bulk_delete(&self, ids: &[Uuid]) -> AppResult<()> {
        let results = join_all(ids.iter().map(|id| self.store.delete(*id))).await;
        settle(results)?;
        info!(count = ids.len(), "Bulk delete applied");
        Ok(())
    }
}

/// Collects batch member results once every request has finished.
///
/// A rejected member must not abort its siblings, so all futures run to
/// completion before the first error is surfaced.
fn settle<T>(results: Vec<AppResult<T>>) -> AppResult<Vec<T>> {
    results.into_iter().collect()
}
