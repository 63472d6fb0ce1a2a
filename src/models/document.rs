use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DOCUMENT_TYPE;

/// A `greeting` document as the content store holds it. Greetings, photos and
/// videos all share this one document type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_type", default = "default_document_type")]
    pub doc_type: String,
    #[serde(rename = "_createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Greeting text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<AssetField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<AssetField>,
    #[serde(default)]
    pub uploader: Option<String>,
}

fn default_document_type() -> String {
    DOCUMENT_TYPE.to_string()
}

impl StoredDocument {
    pub fn new(uploader: String) -> Self {
        Self {
            doc_type: default_document_type(),
            uploader: Some(uploader),
            ..Default::default()
        }
    }

    pub fn image_ref(&self) -> Option<&str> {
        self.image.as_ref().and_then(AssetField::reference)
    }

    pub fn video_ref(&self) -> Option<&str> {
        self.video.as_ref().and_then(AssetField::reference)
    }

    pub fn has_text(&self) -> bool {
        self.fact.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    pub fn has_media(&self) -> bool {
        self.image_ref().is_some() || self.video_ref().is_some()
    }
}

/// An `image` or `file` field embedding an asset pointer. The store
/// dereferences a deleted asset to `null`, which reads as `asset: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetField {
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetPointer>,
}

impl AssetField {
    pub fn image(reference: &str) -> Self {
        Self {
            field_type: Some("image".to_string()),
            asset: Some(AssetPointer::reference(reference)),
        }
    }

    pub fn file(reference: &str) -> Self {
        Self {
            field_type: Some("file".to_string()),
            asset: Some(AssetPointer::reference(reference)),
        }
    }

    pub fn reference(&self) -> Option<&str> {
        self.asset.as_ref()?.reference.as_deref()
    }

    /// The pointer, if it still names an asset.
    pub fn into_pointer(self) -> Option<AssetPointer> {
        self.asset.filter(|a| a.reference.is_some() || a.url.is_some())
    }
}

/// Written as `{_type: "reference", _ref}`. Query projections dereference the
/// asset, so reads may carry `_id` and `url` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPointer {
    #[serde(rename = "_ref", alias = "_id", default)]
    pub reference: Option<String>,
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub pointer_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl AssetPointer {
    pub fn reference(reference: &str) -> Self {
        Self {
            reference: Some(reference.to_string()),
            pointer_type: Some("reference".to_string()),
            url: None,
        }
    }
}
