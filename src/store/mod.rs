mod assets;
mod groq;
mod sanity;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{AssetKind, FileUpload, StoredDocument};

pub use assets::AssetUrlBuilder;
pub use groq::build_query;
pub use sanity::SanityClient;

/// Filters the store knows how to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaQuery {
    /// Documents with an image or a video.
    Gallery,
    /// Documents with greeting text.
    Greetings,
    ById(String),
}

/// The hosted content store: the only persistence the application has.
///
/// Implementations return query results newest first and fail with
/// `AppError::Fetch`, `AppError::Upload` or `AppError::Create`.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn query(&self, query: MediaQuery) -> AppResult<Vec<StoredDocument>>;

    /// Store a binary asset, returning its reference.
    async fn upload(&self, kind: AssetKind, file: FileUpload) -> AppResult<String>;

    /// Persist a new document. The returned document carries the generated
    /// id and is authoritative.
    async fn create(&self, document: StoredDocument) -> AppResult<StoredDocument>;

    fn url_builder(&self) -> &AssetUrlBuilder;

    fn resolve_url(&self, asset_ref: &str, width: Option<u32>) -> Option<String> {
        self.url_builder().resolve(asset_ref, width)
    }
}
