#![cfg(test)]

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::{
    AssetField, AssetKind, FileUpload, MediaEntry, MediaKind, StoredDocument,
};
use crate::store::{AssetUrlBuilder, MediaQuery, MediaStore};

pub fn test_url_builder() -> AssetUrlBuilder {
    AssetUrlBuilder::new("https://cdn.test", "proj", "test")
}

/// Image entry whose asset resolves to `.../images/proj/test/<id>-800x600.jpg`.
pub fn image_entry(id: &str, uploader: &str) -> MediaEntry {
    MediaEntry {
        id: id.to_string(),
        kind: Some(MediaKind::Image),
        asset_ref: Some(format!("image-{}-800x600-jpg", id)),
        display_url: None,
        uploader: uploader.to_string(),
    }
}

/// Video entry with a stored URL of `https://cdn.test/stored/<id>.mp4`.
pub fn video_entry(id: &str, uploader: &str) -> MediaEntry {
    MediaEntry {
        id: id.to_string(),
        kind: Some(MediaKind::Video),
        asset_ref: Some(format!("file-{}-mp4", id)),
        display_url: Some(format!("https://cdn.test/stored/{}.mp4", id)),
        uploader: uploader.to_string(),
    }
}

/// A `MediaStore` held in memory, with call counters and failure switches.
pub struct InMemoryStore {
    urls: AssetUrlBuilder,
    documents: Mutex<Vec<StoredDocument>>,
    uploads: Mutex<Vec<AssetKind>>,
    next_id: AtomicUsize,
    query_calls: AtomicUsize,
    upload_calls: AtomicUsize,
    create_calls: AtomicUsize,
    fail_queries: AtomicBool,
    fail_uploads: AtomicBool,
    fail_creates: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            urls: test_url_builder(),
            documents: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            query_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            fail_queries: AtomicBool::new(false),
            fail_uploads: AtomicBool::new(false),
            fail_creates: AtomicBool::new(false),
        }
    }

    /// Store with `photos` image documents, `videos` video documents and
    /// `greetings` text documents, seeded without counting as calls.
    pub fn seeded(photos: usize, videos: usize, greetings: usize) -> Self {
        let store = Self::new();
        for i in 0..photos {
            let mut doc = StoredDocument::new(format!("photographer {}", i));
            doc.image = Some(AssetField::image(&format!("image-p{}-800x600-jpg", i)));
            store.insert(doc);
        }
        for i in 0..videos {
            let mut doc = StoredDocument::new(format!("filmer {}", i));
            let mut field = AssetField::file(&format!("file-v{}-mp4", i));
            if let Some(asset) = field.asset.as_mut() {
                asset.url = Some(format!("https://cdn.test/stored/v{}.mp4", i));
            }
            doc.video = Some(field);
            store.insert(doc);
        }
        for i in 0..greetings {
            let mut doc = StoredDocument::new(String::new());
            doc.fact = Some(format!("Greeting number {}", i));
            store.insert(doc);
        }
        store
    }

    /// Add a document as if created earlier, assigning id and timestamp.
    pub fn insert(&self, mut document: StoredDocument) -> StoredDocument {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        document.id.get_or_insert_with(|| format!("doc-{}", n));
        let epoch = Utc.with_ymd_and_hms(2023, 8, 26, 15, 0, 0).unwrap();
        document.created_at = Some(epoch + Duration::seconds(n as i64));
        self.documents.lock().unwrap().push(document.clone());
        document
    }

    pub fn fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    pub fn fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.query_calls() + self.upload_calls() + self.create_calls()
    }

    pub fn document_count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn uploaded_kinds(&self) -> Vec<AssetKind> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStore for InMemoryStore {
    async fn query(&self, query: MediaQuery) -> AppResult<Vec<StoredDocument>> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(AppError::Fetch("store unavailable".to_string()));
        }

        let mut found: Vec<StoredDocument> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|doc| match &query {
                MediaQuery::Gallery => doc.image.is_some() || doc.video.is_some(),
                MediaQuery::Greetings => doc.fact.is_some(),
                MediaQuery::ById(id) => doc.id.as_deref() == Some(id.as_str()),
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn upload(&self, kind: AssetKind, file: FileUpload) -> AppResult<String> {
        let n = self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(AppError::Upload(format!("could not store {}", file.filename)));
        }
        self.uploads.lock().unwrap().push(kind);

        Ok(match kind {
            AssetKind::Image => format!("image-up{}-1024x768-jpg", n),
            AssetKind::File => format!("file-up{}-mp4", n),
        })
    }

    async fn create(&self, document: StoredDocument) -> AppResult<StoredDocument> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(AppError::Create("mutation rejected".to_string()));
        }
        Ok(self.insert(document))
    }

    fn url_builder(&self) -> &AssetUrlBuilder {
        &self.urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gallery_query_newest_first() {
        let store = InMemoryStore::seeded(2, 1, 3);

        let docs = store.query(MediaQuery::Gallery).await.unwrap();

        assert_eq!(docs.len(), 3);
        assert!(docs.windows(2).all(|w| w[0].created_at > w[1].created_at));
        assert_eq!(store.query_calls(), 1);
        assert_eq!(store.upload_calls(), 0);
    }

    #[tokio::test]
    async fn test_greetings_query() {
        let store = InMemoryStore::seeded(2, 1, 3);
        let docs = store.query(MediaQuery::Greetings).await.unwrap();
        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(|d| d.fact.is_some()));
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_is_findable() {
        let store = InMemoryStore::new();
        let created = store
            .create(StoredDocument::new("Max".to_string()))
            .await
            .unwrap();
        let id = created.id.clone().unwrap();

        let found = store.query(MediaQuery::ById(id)).await.unwrap();
        assert_eq!(found, vec![created]);
    }

    #[tokio::test]
    async fn test_failure_switches() {
        let store = InMemoryStore::new();
        store.fail_queries(true);
        assert!(matches!(
            store.query(MediaQuery::Gallery).await,
            Err(AppError::Fetch(_))
        ));
        assert_eq!(store.query_calls(), 1);
    }
}
