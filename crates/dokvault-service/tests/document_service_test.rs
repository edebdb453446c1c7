//! Document and bulk service integration tests against the in-memory
//! store.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use common::{TestContext, metadata};
use dokvault_core::error::ErrorKind;
use dokvault_core::traits::RecordStore;
use dokvault_core::types::filter::FieldFilter;
use dokvault_core::AppResult;
use dokvault_entity::document::{
    DocumentKind, DocumentUpdate, DocumentVersion, NewDocumentVersion,
};
use dokvault_service::document::BulkService;
use dokvault_service::upload::UploadOutcome;
use dokvault_service::version::SelectedFile;
use dokvault_store::memory::InMemoryDocumentStore;

async fn create(ctx: &TestContext, file_name: &str, name: &str) -> dokvault_entity::document::DocumentVersion {
    match ctx
        .uploads
        .submit(&SelectedFile::new(file_name, vec![0u8; 64]), &metadata(name, "Acme"))
        .await
        .expect("upload")
    {
        UploadOutcome::Created(doc) => doc,
        UploadOutcome::Conflict(reference) => ctx
            .uploads
            .resume_as_new_version(&SelectedFile::new(file_name, vec![0u8; 64]), &reference)
            .await
            .expect("resume"),
    }
}

#[tokio::test]
async fn list_latest_returns_one_record_per_family() {
    let ctx = TestContext::new();
    create(&ctx, "a.pdf", "A").await;
    create(&ctx, "a.pdf", "A").await;
    create(&ctx, "a.pdf", "A").await;
    create(&ctx, "b.pdf", "B").await;

    let latest = ctx.documents.list_latest().await.expect("list");
    assert_eq!(latest.len(), 2);
    let a = latest
        .iter()
        .find(|doc| doc.file_name == "a.pdf")
        .expect("family a");
    assert_eq!(a.version_number, 3);
}

#[tokio::test]
async fn family_history_is_newest_first() {
    let ctx = TestContext::new();
    create(&ctx, "a.pdf", "A").await;
    create(&ctx, "a.pdf", "A").await;
    create(&ctx, "b.pdf", "B").await;

    let history = ctx.documents.family_history("a.pdf").await.expect("history");
    let numbers: Vec<u32> = history.iter().map(|doc| doc.version_number).collect();
    assert_eq!(numbers, vec![2, 1]);
}

#[tokio::test]
async fn update_applies_only_present_fields() {
    let ctx = TestContext::new();
    let doc = create(&ctx, "a.pdf", "A").await;

    let updated = ctx
        .documents
        .update(
            doc.id,
            &DocumentUpdate {
                dokumentart: Some(DocumentKind::Zertifikat),
                ..Default::default()
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.dokumentart, DocumentKind::Zertifikat);
    assert_eq!(updated.name, doc.name);
    assert_eq!(updated.hersteller, doc.hersteller);
    assert_eq!(updated.version_number, doc.version_number);
}

#[tokio::test]
async fn empty_update_is_rejected() {
    let ctx = TestContext::new();
    let doc = create(&ctx, "a.pdf", "A").await;
    let err = ctx
        .documents
        .update(doc.id, &DocumentUpdate::default())
        .await
        .expect_err("empty update");
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn delete_removes_one_version_without_cascading() {
    let ctx = TestContext::new();
    create(&ctx, "a.pdf", "A").await;
    let second = create(&ctx, "a.pdf", "A").await;

    ctx.documents.delete(second.id).await.expect("delete");

    let history = ctx.documents.family_history("a.pdf").await.expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].version_number, 1);

    let err = ctx.documents.get(second.id).await.expect_err("gone");
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn bulk_update_hits_every_selected_record() {
    let ctx = TestContext::new();
    let a = create(&ctx, "a.pdf", "A").await;
    let b = create(&ctx, "b.pdf", "B").await;
    let untouched = create(&ctx, "c.pdf", "C").await;

    let updated = ctx
        .bulk
        .bulk_update(
            &[a.id, b.id],
            &DocumentUpdate {
                hersteller: Some("Widgets GmbH".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("bulk update");
    assert_eq!(updated.len(), 2);
    assert!(updated.iter().all(|doc| doc.hersteller == "Widgets GmbH"));

    let kept = ctx.documents.get(untouched.id).await.expect("get");
    assert_eq!(kept.hersteller, "Acme");
}

#[tokio::test]
async fn bulk_update_with_no_fields_is_rejected() {
    let ctx = TestContext::new();
    let a = create(&ctx, "a.pdf", "A").await;
    let err = ctx
        .bulk
        .bulk_update(&[a.id], &DocumentUpdate::default())
        .await
        .expect_err("empty bulk update");
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn bulk_delete_removes_all_selected_records() {
    let ctx = TestContext::new();
    let a = create(&ctx, "a.pdf", "A").await;
    let b = create(&ctx, "b.pdf", "B").await;
    let kept = create(&ctx, "c.pdf", "C").await;

    ctx.bulk.bulk_delete(&[a.id, b.id]).await.expect("bulk delete");

    let latest = ctx.documents.list_latest().await.expect("list");
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].id, kept.id);
}

#[tokio::test]
async fn bulk_failure_does_not_roll_back_applied_members() {
    let ctx = TestContext::new();
    let a = create(&ctx, "a.pdf", "A").await;

    // One id in the batch no longer exists; the batch fails as a whole
    // but no compensation runs for members that may have been applied.
    let err = ctx
        .bulk
        .bulk_delete(&[a.id, Uuid::new_v4()])
        .await
        .expect_err("batch failure");
    assert_eq!(err.kind, ErrorKind::NotFound);
}

/// Store whose deletes of existing records pause before touching the
/// shared collection, while deletes of unknown ids fail immediately.
/// A batch mixing the two has a request still in flight when the first
/// member error arrives.
struct SlowDeleteStore {
    inner: InMemoryDocumentStore,
}

#[async_trait]
impl RecordStore<DocumentVersion, NewDocumentVersion, DocumentUpdate> for SlowDeleteStore {
    async fn list(&self) -> AppResult<Vec<DocumentVersion>> {
        self.inner.list().await
    }

    async fn get(&self, id: Uuid) -> AppResult<DocumentVersion> {
        self.inner.get(id).await
    }

    async fn filter(&self, filters: &[FieldFilter]) -> AppResult<Vec<DocumentVersion>> {
        self.inner.filter(filters).await
    }

    async fn create(&self, draft: &NewDocumentVersion) -> AppResult<DocumentVersion> {
        self.inner.create(draft).await
    }

    async fn update(&self, id: Uuid, fields: &DocumentUpdate) -> AppResult<DocumentVersion> {
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.inner.get(id).await?;
        tokio::time::sleep(Duration::from_millis(100)).await;
        self.inner.delete(id).await
    }
}

#[tokio::test(start_paused = true)]
async fn bulk_failure_does_not_cancel_in_flight_siblings() {
    let ctx = TestContext::new();
    let a = create(&ctx, "a.pdf", "A").await;

    // The missing id fails fast while the valid delete is still
    // sleeping. The batch reports the failure only after the slow
    // member has run to completion.
    let bulk = BulkService::new(Arc::new(SlowDeleteStore {
        inner: ctx.store.clone(),
    }));
    let err = bulk
        .bulk_delete(&[Uuid::new_v4(), a.id])
        .await
        .expect_err("batch failure");
    assert_eq!(err.kind, ErrorKind::NotFound);

    assert!(ctx.store.is_empty().await, "in-flight delete was dropped");
}
