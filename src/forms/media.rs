use tracing::info;

use crate::constants::{
    PHOTO_FAILED, PHOTO_REQUIRED, PHOTO_SUBMIT_LABEL, VIDEO_FAILED, VIDEO_REQUIRED,
    VIDEO_SUBMIT_LABEL,
};
use crate::error::{AppError, AppResult};
use crate::forms::{uploader_or_anonymous, SubmitState};
use crate::logging::log_error;
use crate::models::{
    AssetField, AssetKind, FileUpload, MediaEntry, MediaKind, StoredDocument, UploadDraft,
};
use crate::store::MediaStore;

/// The photo or the video upload form of the album.
#[derive(Debug, Clone)]
pub struct MediaForm {
    kind: MediaKind,
    draft: UploadDraft,
    state: SubmitState,
}

impl MediaForm {
    pub fn photo() -> Self {
        Self::new(MediaKind::Image)
    }

    pub fn video() -> Self {
        Self::new(MediaKind::Video)
    }

    fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            draft: UploadDraft::default(),
            state: SubmitState::default(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn draft(&self) -> &UploadDraft {
        &self.draft
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn button_label(&self) -> &'static str {
        match self.kind {
            MediaKind::Image => self.state.button_label(PHOTO_SUBMIT_LABEL),
            MediaKind::Video => self.state.button_label(VIDEO_SUBMIT_LABEL),
        }
    }

    pub fn select_file(&mut self, file: FileUpload) {
        self.draft.file = Some(file);
    }

    pub fn set_uploader_name(&mut self, name: impl Into<String>) {
        self.draft.uploader_name = name.into();
    }

    pub fn begin(&mut self) -> AppResult<MediaSubmission> {
        self.state.start()?;

        let Some(file) = self.draft.file.clone() else {
            let message = self.required_message();
            return Err(self.state.reject(message));
        };

        self.state.mark_submitting();
        Ok(MediaSubmission {
            kind: self.kind,
            file,
            uploader: uploader_or_anonymous(&self.draft.uploader_name),
        })
    }

    /// Apply the outcome of `send`. The new entry is returned for the caller
    /// to prepend; on failure the draft is kept for a retry.
    pub fn finish(&mut self, result: AppResult<MediaEntry>) -> Option<MediaEntry> {
        match result {
            Ok(entry) => {
                self.state.settle(None);
                self.draft.clear();
                Some(entry)
            }
            Err(e) => {
                log_error(&format!("Error posting {}", self.kind), &e);
                let message = self.failed_message();
                self.state.settle(Some(message));
                None
            }
        }
    }

    fn required_message(&self) -> &'static str {
        match self.kind {
            MediaKind::Image => PHOTO_REQUIRED,
            MediaKind::Video => VIDEO_REQUIRED,
        }
    }

    fn failed_message(&self) -> &'static str {
        match self.kind {
            MediaKind::Image => PHOTO_FAILED,
            MediaKind::Video => VIDEO_FAILED,
        }
    }
}

/// A validated photo or video ready to be sent.
#[derive(Debug, Clone)]
pub struct MediaSubmission {
    kind: MediaKind,
    file: FileUpload,
    uploader: String,
}

impl MediaSubmission {
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Upload the file, then create the record pointing at it. A failed
    /// upload creates nothing.
    pub async fn send(self, store: &dyn MediaStore) -> AppResult<MediaEntry> {
        let asset_kind = match self.kind {
            MediaKind::Image => AssetKind::Image,
            MediaKind::Video => AssetKind::File,
        };
        let asset_ref = store.upload(asset_kind, self.file).await?;

        let mut document = StoredDocument::new(self.uploader);
        match self.kind {
            MediaKind::Image => document.image = Some(AssetField::image(&asset_ref)),
            MediaKind::Video => document.video = Some(AssetField::file(&asset_ref)),
        }

        let created = store.create(document).await?;
        let entry = MediaEntry::from_document(created)
            .ok_or_else(|| AppError::Create("Created document has no id".to_string()))?;
        info!("Posted {} {} by {}", self.kind, entry.id, entry.uploader);
        Ok(entry)
    }
}
