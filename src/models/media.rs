use serde::Serialize;
use std::fmt;

use crate::models::{AssetField, StoredDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    Image,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// One photo or video in the album.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    pub id: String,
    /// `None` when the record carries neither an image nor a video.
    pub kind: Option<MediaKind>,
    pub asset_ref: Option<String>,
    /// Fetchable URL the store reported for the asset, if any.
    pub display_url: Option<String>,
    pub uploader: String,
}

impl MediaEntry {
    /// Documents without an id cannot be addressed and are skipped. An image
    /// wins over a video when a document carries both.
    pub fn from_document(doc: StoredDocument) -> Option<Self> {
        let id = doc.id?;
        let image = doc.image.and_then(AssetField::into_pointer);
        let video = doc.video.and_then(AssetField::into_pointer);
        let (kind, pointer) = match (image, video) {
            (Some(image), _) => (Some(MediaKind::Image), Some(image)),
            (None, Some(video)) => (Some(MediaKind::Video), Some(video)),
            (None, None) => (None, None),
        };
        let (asset_ref, display_url) = match pointer {
            Some(pointer) => (pointer.reference, pointer.url),
            None => (None, None),
        };

        Some(Self {
            id,
            kind,
            asset_ref,
            display_url,
            uploader: doc.uploader.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub asset_ref: String,
    pub url: Option<String>,
}

/// A text greeting, optionally with one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingEntry {
    pub id: String,
    pub text: String,
    pub uploader: String,
    pub optional_image: Option<ImageRef>,
}

impl GreetingEntry {
    /// Skips documents without an id or with blank text.
    pub fn from_document(doc: StoredDocument) -> Option<Self> {
        if !doc.has_text() {
            return None;
        }
        let optional_image = doc
            .image
            .and_then(AssetField::into_pointer)
            .and_then(|pointer| {
                let url = pointer.url;
                pointer.reference.map(|asset_ref| ImageRef { asset_ref, url })
            });

        Some(Self {
            id: doc.id?,
            text: doc.fact.unwrap_or_default(),
            uploader: doc.uploader.unwrap_or_default(),
            optional_image,
        })
    }
}
