//! Upload orchestration over the collaborator traits.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use dokvault_core::config::upload::UploadConfig;
use dokvault_core::traits::{BlobStore, CurrentUserProvider};
use dokvault_core::types::filter::FieldFilter;
use dokvault_core::{AppError, AppResult};
use dokvault_entity::document::{DocumentMetadata, DocumentStore, DocumentVersion};

use crate::version::resolver::{VersionResolution, resolve};
use crate::version::sequencer::{MetadataSource, SelectedFile, build_draft};

/// Result of submitting a fresh upload.
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// The new version record was created.
    Created(DocumentVersion),
    /// The filename matches an existing family; the carried record is its
    /// current version. The caller must obtain a user decision before the
    /// upload proceeds (or is cancelled). Nothing has been uploaded yet.
    Conflict(DocumentVersion),
}

/// Seed data for the targeted new-version flow: the reference record and
/// the form metadata prefilled from it.
#[derive(Debug, Clone)]
pub struct NewVersionSeed {
    /// The record the new version will follow.
    pub reference: DocumentVersion,
    /// Form metadata prefilled from the reference. `hersteller` and
    /// `produkt` are not editable in this flow; `datum` keeps the
    /// reference's value.
    pub metadata: DocumentMetadata,
}

/// Performs uploads: local validation, conflict detection, blob transfer,
/// and record creation — awaited strictly in that order, with no parallel
/// in-flight requests for a single upload and no automatic retry.
#[derive(Clone)]
pub struct UploadService {
    /// Document record store.
    store: Arc<dyn DocumentStore>,
    /// Blob upload collaborator.
    blobs: Arc<dyn BlobStore>,
    /// Acting-user resolver.
    users: Arc<dyn CurrentUserProvider>,
    /// Upload limits.
    config: UploadConfig,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService").finish()
    }
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        blobs: Arc<dyn BlobStore>,
        users: Arc<dyn CurrentUserProvider>,
        config: UploadConfig,
    ) -> Self {
        Self {
            store,
            blobs,
            users,
            config,
        }
    }

    /// Submit a fresh (non-targeted) upload.
    ///
    /// Detects a filename conflict against the existing records first; a
    /// conflict is returned as a decision point, not an error, and nothing
    /// has been transferred or created at that point. Otherwise validates
    /// the entered metadata and performs the upload.
    pub async fn submit(
        &self,
        file: &SelectedFile,
        metadata: &DocumentMetadata,
    ) -> AppResult<UploadOutcome> {
        self.validate_file(file)?;

        let family = self
            .store
            .filter(&[FieldFilter::file_name(&file.name)])
            .await?;
        if let VersionResolution::ExistingFamily(reference) = resolve(&file.name, &family)? {
            info!(
                file_name = %file.name,
                current_version = reference.version_number,
                "Filename conflict detected, awaiting user choice"
            );
            return Ok(UploadOutcome::Conflict(reference));
        }

        metadata.ensure_complete()?;
        let document = self
            .perform(file, None, MetadataSource::Fresh(metadata))
            .await?;
        Ok(UploadOutcome::Created(document))
    }

    /// Continue an existing family after the user confirmed a conflict.
    ///
    /// Descriptive fields are inherited verbatim from the reference; only
    /// `datum` is reset to today.
    pub async fn resume_as_new_version(
        &self,
        file: &SelectedFile,
        reference: &DocumentVersion,
    ) -> AppResult<DocumentVersion> {
        self.validate_file(file)?;
        self.perform(file, Some(reference), MetadataSource::Inherit)
            .await
    }

    /// Start the targeted new-version flow for an existing record.
    ///
    /// Fails with a not-found error when the record no longer exists.
    pub async fn begin_new_version(&self, document_id: Uuid) -> AppResult<NewVersionSeed> {
        let reference = self.store.get(document_id).await?;
        let metadata = DocumentMetadata {
            name: reference.name.clone(),
            hersteller: reference.hersteller.clone(),
            produkt: reference.produkt.clone(),
            gehoert_zu: reference.gehoert_zu.clone(),
            dokumentart: Some(reference.dokumentart),
            datum: Some(reference.datum),
        };
        Ok(NewVersionSeed {
            reference,
            metadata,
        })
    }

    /// Submit the targeted new-version flow. The conflict check is
    /// skipped — the family was explicitly chosen.
    pub async fn submit_new_version(
        &self,
        file: &SelectedFile,
        reference: &DocumentVersion,
        metadata: &DocumentMetadata,
    ) -> AppResult<DocumentVersion> {
        self.validate_file(file)?;
        metadata.ensure_complete()?;
        self.perform(file, Some(reference), MetadataSource::Fresh(metadata))
            .await
    }

    /// Check size limit and accepted extension before anything leaves the
    /// client.
    fn validate_file(&self, file: &SelectedFile) -> AppResult<()> {
        if file.size > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }
        if !self.config.is_extension_allowed(&file.name) {
            return Err(AppError::validation(format!(
                "File type of '{}' is not accepted",
                file.name
            )));
        }
        Ok(())
    }

    /// The upload proper: resolve the acting user, transfer the blob,
    /// build the draft, create the record.
    async fn perform(
        &self,
        file: &SelectedFile,
        reference: Option<&DocumentVersion>,
        source: MetadataSource<'_>,
    ) -> AppResult<DocumentVersion> {
        let user = self.users.me().await?;
        let blob = self.blobs.upload(file.data.clone(), &file.name).await?;
        let draft = build_draft(
            reference,
            source,
            file,
            &blob.file_url,
            &user.full_name,
            Utc::now().date_naive(),
        )?;
        let document = self.store.create(&draft).await?;

        info!(
            file_name = %document.file_name,
            version = document.version_number,
            size = document.file_size,
            created_by = %document.created_by,
            "Document version created"
        );
        Ok(document)
    }
}
