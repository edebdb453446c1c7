//! Upload flow state machine.
//!
//! `Idle → FileSelected → { ConflictDetected → [confirm | cancel] } |
//! Uploading → Succeeded | Failed`. The flow is an explicit value passed
//! into the upload path — there is no process-wide upload state. A failed
//! attempt is only retried by the user submitting again; nothing retries
//! automatically, and an upload cannot be cancelled once it is in flight.

use dokvault_core::{AppError, AppResult};
use dokvault_entity::document::{DocumentMetadata, DocumentVersion};

use crate::version::sequencer::SelectedFile;

use super::service::{UploadOutcome, UploadService};

/// The phases of one upload interaction.
#[derive(Debug, Clone)]
pub enum UploadState {
    /// No file picked yet.
    Idle,
    /// A file is picked, the form is being filled.
    FileSelected(SelectedFile),
    /// The filename matches an existing family; waiting for the user to
    /// confirm continuing it or cancel.
    ConflictDetected {
        /// The picked file.
        file: SelectedFile,
        /// The matched family's current version.
        reference: DocumentVersion,
    },
    /// The blob transfer and record creation are in flight.
    Uploading,
    /// The version record was created.
    Succeeded(DocumentVersion),
    /// The attempt failed; the file is kept so the user can submit again.
    Failed {
        /// The picked file.
        file: SelectedFile,
        /// What went wrong.
        error: AppError,
    },
    /// The user backed out of the conflict decision.
    Cancelled,
}

impl UploadState {
    /// Short name of the state, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FileSelected(_) => "file_selected",
            Self::ConflictDetected { .. } => "conflict_detected",
            Self::Uploading => "uploading",
            Self::Succeeded(_) => "succeeded",
            Self::Failed { .. } => "failed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Drives one upload interaction through its states.
///
/// A flow optionally targets an existing record (the "create new version
/// for this document" path); a targeted flow skips the conflict check
/// because the family was explicitly chosen.
#[derive(Debug)]
pub struct UploadFlow {
    service: UploadService,
    target: Option<DocumentVersion>,
    state: UploadState,
}

impl UploadFlow {
    /// Start a fresh upload flow.
    pub fn new(service: UploadService) -> Self {
        Self {
            service,
            target: None,
            state: UploadState::Idle,
        }
    }

    /// Start a flow targeting an existing record.
    pub fn for_update(service: UploadService, reference: DocumentVersion) -> Self {
        Self {
            service,
            target: Some(reference),
            state: UploadState::Idle,
        }
    }

    /// The current state.
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Pick (or replace) the file. Allowed in every state except while an
    /// upload is in flight.
    pub fn select_file(&mut self, file: SelectedFile) -> AppResult<&UploadState> {
        if matches!(self.state, UploadState::Uploading) {
            return Err(self.wrong_state("select a file"));
        }
        self.state = UploadState::FileSelected(file);
        Ok(&self.state)
    }

    /// Submit the picked file with the entered metadata.
    ///
    /// Allowed from `FileSelected` and `Failed` (manual retry). A detected
    /// conflict lands in `ConflictDetected`; any failure lands in `Failed`
    /// with the file retained.
    pub async fn submit(&mut self, metadata: &DocumentMetadata) -> AppResult<&UploadState> {
        let file = match std::mem::replace(&mut self.state, UploadState::Uploading) {
            UploadState::FileSelected(file) | UploadState::Failed { file, .. } => file,
            other => {
                self.state = other;
                return Err(self.wrong_state("submit"));
            }
        };

        let result = match &self.target {
            Some(reference) => self
                .service
                .submit_new_version(&file, reference, metadata)
                .await
                .map(UploadOutcome::Created),
            None => self.service.submit(&file, metadata).await,
        };

        self.state = match result {
            Ok(UploadOutcome::Created(document)) => UploadState::Succeeded(document),
            Ok(UploadOutcome::Conflict(reference)) => {
                UploadState::ConflictDetected { file, reference }
            }
            Err(error) => UploadState::Failed { file, error },
        };
        Ok(&self.state)
    }

    /// Confirm continuing the conflicting family as a new version.
    pub async fn confirm_new_version(&mut self) -> AppResult<&UploadState> {
        let (file, reference) =
            match std::mem::replace(&mut self.state, UploadState::Uploading) {
                UploadState::ConflictDetected { file, reference } => (file, reference),
                other => {
                    self.state = other;
                    return Err(self.wrong_state("confirm the new version"));
                }
            };

        self.state = match self
            .service
            .resume_as_new_version(&file, &reference)
            .await
        {
            Ok(document) => UploadState::Succeeded(document),
            Err(error) => UploadState::Failed { file, error },
        };
        Ok(&self.state)
    }

    /// Back out of the conflict decision (or abandon a picked file).
    pub fn cancel(&mut self) -> AppResult<&UploadState> {
        match self.state {
            UploadState::FileSelected(_)
            | UploadState::ConflictDetected { .. }
            | UploadState::Failed { .. } => {
                self.state = UploadState::Cancelled;
                Ok(&self.state)
            }
            _ => Err(self.wrong_state("cancel")),
        }
    }

    fn wrong_state(&self, action: &str) -> AppError {
        AppError::conflict(format!(
            "cannot {action} while the upload flow is in state '{}'",
            self.state.name()
        ))
    }
}
