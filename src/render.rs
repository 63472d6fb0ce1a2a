use serde::Serialize;

use crate::constants::{ANONYMOUS, CARD_IMAGE_WIDTH};
use crate::models::{GreetingEntry, MediaEntry, MediaKind};
use crate::store::AssetUrlBuilder;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCard {
    pub id: String,
    /// Position in the album, passed back to open the lightbox.
    pub index: usize,
    pub kind: Option<MediaKind>,
    pub src: Option<String>,
    pub uploader_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingCard {
    pub id: String,
    pub index: usize,
    pub quote: String,
    pub uploader_label: String,
    pub image_src: Option<String>,
}

pub fn attribution(uploader: &str) -> String {
    let name = if uploader.is_empty() {
        ANONYMOUS
    } else {
        uploader
    };
    format!("Uploaded by: {}", name)
}

pub fn media_cards(entries: &[MediaEntry], urls: &AssetUrlBuilder) -> Vec<MediaCard> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| MediaCard {
            id: entry.id.clone(),
            index,
            kind: entry.kind,
            src: urls.media_url(entry, Some(CARD_IMAGE_WIDTH)),
            uploader_label: attribution(&entry.uploader),
        })
        .collect()
}

pub fn greeting_cards(entries: &[GreetingEntry], urls: &AssetUrlBuilder) -> Vec<GreetingCard> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| GreetingCard {
            id: entry.id.clone(),
            index,
            quote: format!("\"{}\"", entry.text),
            uploader_label: attribution(&entry.uploader),
            image_src: greeting_image_url(entry, urls, Some(CARD_IMAGE_WIDTH)),
        })
        .collect()
}

pub fn greeting_image_url(
    entry: &GreetingEntry,
    urls: &AssetUrlBuilder,
    width: Option<u32>,
) -> Option<String> {
    let image = entry.optional_image.as_ref()?;
    urls.resolve(&image.asset_ref, width)
        .or_else(|| image.url.clone())
}
