use tracing::info;

use crate::constants::{GREETING_FAILED, GREETING_REQUIRED, GREETING_SUBMIT_LABEL};
use crate::error::{AppError, AppResult};
use crate::forms::{uploader_or_anonymous, SubmitState};
use crate::logging::log_error;
use crate::models::{
    AssetField, AssetKind, FileUpload, GreetingEntry, StoredDocument, UploadDraft,
};
use crate::store::MediaStore;

/// Text greeting with an optional picture.
#[derive(Debug, Clone, Default)]
pub struct GreetingForm {
    draft: UploadDraft,
    state: SubmitState,
}

impl GreetingForm {
    pub fn new() -> Self {
        Self::default()
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
        self.state.button_label(GREETING_SUBMIT_LABEL)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn set_uploader_name(&mut self, name: impl Into<String>) {
        self.draft.uploader_name = name.into();
    }

    pub fn select_image(&mut self, file: FileUpload) {
        self.draft.file = Some(file);
    }

    pub fn begin(&mut self) -> AppResult<GreetingSubmission> {
        self.state.start()?;

        if self.draft.text.trim().is_empty() {
            return Err(self.state.reject(GREETING_REQUIRED));
        }

        self.state.mark_submitting();
        Ok(GreetingSubmission {
            text: self.draft.text.clone(),
            uploader: uploader_or_anonymous(&self.draft.uploader_name),
            image: self.draft.file.clone(),
        })
    }

    pub fn finish(&mut self, result: AppResult<GreetingEntry>) -> Option<GreetingEntry> {
        match result {
            Ok(entry) => {
                self.state.settle(None);
                self.draft.clear();
                Some(entry)
            }
            Err(e) => {
                log_error("Error posting greeting", &e);
                self.state.settle(Some(GREETING_FAILED));
                None
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct GreetingSubmission {
    text: String,
    uploader: String,
    image: Option<FileUpload>,
}

impl GreetingSubmission {
    pub async fn send(self, store: &dyn MediaStore) -> AppResult<GreetingEntry> {
        let image = match self.image {
            Some(file) => Some(store.upload(AssetKind::Image, file).await?),
            None => None,
        };

        let mut document = StoredDocument::new(self.uploader);
        document.fact = Some(self.text);
        document.image = image.as_deref().map(AssetField::image);

        let created = store.create(document).await?;
        let entry = GreetingEntry::from_document(created)
            .ok_or_else(|| AppError::Create("Created greeting is incomplete".to_string()))?;
        info!("Posted greeting {} by {}", entry.id, entry.uploader);
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::InMemoryStore;

    #[tokio::test]
    async fn test_empty_text_makes_no_calls() {
        let store = InMemoryStore::new();
        let mut form = GreetingForm::new();
        form.set_text("   \n");
        form.select_image(FileUpload::new("us.png", vec![1]));

        let err = form.begin().unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(form.error(), Some("Greeting cannot be empty."));
        assert!(!form.is_submitting());
        assert_eq!(store.total_calls(), 0);
        assert!(form.draft().file.is_some());
    }

    #[tokio::test]
    async fn test_text_only_greeting() {
        let store = InMemoryStore::new();
        let mut form = GreetingForm::new();
        form.set_text("All the best!");

        let result = form.begin().unwrap().send(&store).await;
        let entry = form.finish(result).unwrap();

        assert_eq!(entry.text, "All the best!");
        assert_eq!(entry.uploader, "Anonymous");
        assert!(entry.optional_image.is_none());
        assert_eq!(store.upload_calls(), 0);
        assert_eq!(store.create_calls(), 1);
        assert_eq!(form.draft(), &UploadDraft::default());
        assert_eq!(form.button_label(), "Send");
    }

    #[tokio::test]
    async fn test_greeting_with_image() {
        let store = InMemoryStore::new();
        let mut form = GreetingForm::new();
        form.set_text("Love you both");
        form.set_uploader_name("Kim");
        form.select_image(FileUpload::new("kiss.jpg", vec![7; 8]));

        let result = form.begin().unwrap().send(&store).await;
        let entry = form.finish(result).unwrap();

        assert_eq!(entry.uploader, "Kim");
        let image = entry.optional_image.unwrap();
        assert!(image.asset_ref.starts_with("image-"));
        assert_eq!(store.uploaded_kinds(), vec![AssetKind::Image]);
    }

    #[tokio::test]
    async fn test_failure_keeps_draft_and_sets_message() {
        let store = InMemoryStore::new();
        store.fail_creates(true);
        let mut form = GreetingForm::new();
        form.set_text("Cheers");
        form.set_uploader_name("Lou");

        let result = form.begin().unwrap().send(&store).await;
        assert!(form.finish(result).is_none());

        assert!(!form.is_submitting());
        assert_eq!(
            form.error(),
            Some("There was an issue sending your greeting. Please try again.")
        );
        assert_eq!(form.draft().text, "Cheers");
        assert_eq!(form.draft().uploader_name, "Lou");
    }

    #[tokio::test]
    async fn test_image_upload_failure_aborts() {
        let store = InMemoryStore::new();
        store.fail_uploads(true);
        let mut form = GreetingForm::new();
        form.set_text("Hi");
        form.select_image(FileUpload::new("a.jpg", vec![1]));

        let result = form.begin().unwrap().send(&store).await;
        assert!(matches!(result, Err(AppError::Upload(_))));
        assert_eq!(store.create_calls(), 0);
    }
}
