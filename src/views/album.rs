use tracing::{info, warn};

use crate::constants::NO_MEDIA;
use crate::error::AppResult;
use crate::forms::MediaForm;
use crate::gallery::{GalleryController, Shuffler};
use crate::logging::log_error;
use crate::models::{MediaEntry, StoredDocument};
use crate::render::{media_cards, MediaCard};
use crate::store::AssetUrlBuilder;
use crate::views::{LoadStatus, Outcome, Task};

/// The album page: photo and video forms, the media grid and its lightbox.
#[derive(Debug, Clone)]
pub struct AlbumView {
    status: LoadStatus,
    gallery: GalleryController,
    photo_form: MediaForm,
    video_form: MediaForm,
}

impl AlbumView {
    pub fn new(urls: AssetUrlBuilder) -> Self {
        Self {
            status: LoadStatus::Loading,
            gallery: GalleryController::new(urls),
            photo_form: MediaForm::photo(),
            video_form: MediaForm::video(),
        }
    }

    pub fn load(&mut self) -> Task {
        self.status = LoadStatus::Loading;
        Task::LoadAlbum
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn gallery(&self) -> &GalleryController {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut GalleryController {
        &mut self.gallery
    }

    pub fn photo_form(&self) -> &MediaForm {
        &self.photo_form
    }

    pub fn photo_form_mut(&mut self) -> &mut MediaForm {
        &mut self.photo_form
    }

    pub fn video_form(&self) -> &MediaForm {
        &self.video_form
    }

    pub fn video_form_mut(&mut self) -> &mut MediaForm {
        &mut self.video_form
    }

    pub fn entries(&self) -> &[MediaEntry] {
        self.gallery.entries()
    }

    pub fn cards(&self) -> Vec<MediaCard> {
        media_cards(self.gallery.entries(), self.gallery.urls())
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.gallery.entries().is_empty() {
            Some(NO_MEDIA)
        } else {
            None
        }
    }

    /// `None` when the form refused to start; its error says why.
    pub fn submit_photo(&mut self) -> Option<Task> {
        self.photo_form.begin().ok().map(Task::SubmitPhoto)
    }

    pub fn submit_video(&mut self) -> Option<Task> {
        self.video_form.begin().ok().map(Task::SubmitVideo)
    }

    pub fn apply(&mut self, outcome: Outcome, shuffler: &mut Shuffler) {
        match outcome {
            Outcome::AlbumLoaded(result) => self.apply_loaded(result, shuffler),
            Outcome::PhotoPosted(result) => {
                if let Some(entry) = self.photo_form.finish(result) {
                    self.gallery.prepend(entry);
                }
            }
            Outcome::VideoPosted(result) => {
                if let Some(entry) = self.video_form.finish(result) {
                    self.gallery.prepend(entry);
                }
            }
            other => warn!("Album ignoring {:?}", other),
        }
    }

    fn apply_loaded(&mut self, result: AppResult<Vec<StoredDocument>>, shuffler: &mut Shuffler) {
        match result {
            Ok(documents) => {
                let mut entries: Vec<MediaEntry> = documents
                    .into_iter()
                    .filter_map(MediaEntry::from_document)
                    .collect();
                shuffler.shuffle(&mut entries);
                info!("Fetched and shuffled {} media entries", entries.len());
                self.gallery.replace(entries);
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                log_error("Fetch media failed", &e);
                self.gallery.replace(Vec::new());
                self.status = LoadStatus::Failed;
            }
        }
    }
}
