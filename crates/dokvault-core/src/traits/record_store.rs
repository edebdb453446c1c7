//! Generic CRUD record store trait for the remote entity API.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::filter::FieldFilter;

/// Generic CRUD store over a remote entity collection.
///
/// This trait is defined with generic type parameters so that each entity
/// can have a strongly typed store: `Entity` is the persisted record,
/// `Draft` the client-side creation payload (lacking server-assigned id
/// and timestamps), and `Update` a sparse partial-update record.
///
/// All calls may fail with a generic store error; the API defines no
/// structured error codes beyond not-found. Nothing is retried here.
#[async_trait]
pub trait RecordStore<Entity, Draft, Update>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Draft: Send + Sync + 'static,
    Update: Send + Sync + 'static,
{
    /// List every record in the collection.
    async fn list(&self) -> AppResult<Vec<Entity>>;

    /// Fetch one record by id. Fails with a not-found error when the id
    /// no longer exists.
    async fn get(&self, id: Uuid) -> AppResult<Entity>;

    /// List the records matching all of the given equality filters.
    async fn filter(&self, filters: &[FieldFilter]) -> AppResult<Vec<Entity>>;

    /// Create a new record and return it with server-assigned fields.
    async fn create(&self, draft: &Draft) -> AppResult<Entity>;

    /// Apply a sparse update to one record and return the updated record.
    async fn update(&self, id: Uuid, fields: &Update) -> AppResult<Entity>;

    /// Delete one record by id.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}
