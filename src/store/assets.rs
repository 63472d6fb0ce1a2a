use crate::config::StoreConfig;
use crate::models::{MediaEntry, MediaKind};

/// Turns stored asset references into CDN URLs.
///
/// Image references look like `image-<id>-<width>x<height>-<format>` and file
/// references like `file-<id>-<extension>`. Anything else does not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrlBuilder {
    cdn_host: String,
    project_id: String,
    dataset: String,
}

impl AssetUrlBuilder {
    pub fn new(cdn_host: &str, project_id: &str, dataset: &str) -> Self {
        Self {
            cdn_host: cdn_host.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.cdn_host, &config.project_id, &config.dataset)
    }

    pub fn resolve(&self, asset_ref: &str, width: Option<u32>) -> Option<String> {
        let parts: Vec<&str> = asset_ref.split('-').collect();
        match parts.as_slice() {
            ["image", id @ .., dims, format] if !id.is_empty() && is_dimensions(dims) => {
                let mut url = format!(
                    "{}/images/{}/{}/{}-{}.{}",
                    self.cdn_host,
                    self.project_id,
                    self.dataset,
                    id.join("-"),
                    dims,
                    format
                );
                if let Some(w) = width {
                    url.push_str(&format!("?w={}", w));
                }
                Some(url)
            }
            ["file", id @ .., ext] if !id.is_empty() => Some(format!(
                "{}/files/{}/{}/{}.{}",
                self.cdn_host,
                self.project_id,
                self.dataset,
                id.join("-"),
                ext
            )),
            _ => None,
        }
    }

    /// URL to show for an entry. Images go through the image CDN, optionally
    /// width-constrained; videos use the stored asset URL as is.
    pub fn media_url(&self, entry: &MediaEntry, width: Option<u32>) -> Option<String> {
        match entry.kind? {
            MediaKind::Image => entry
                .asset_ref
                .as_deref()
                .and_then(|r| self.resolve(r, width))
                .or_else(|| entry.display_url.clone()),
            MediaKind::Video => entry
                .display_url
                .clone()
                .or_else(|| entry.asset_ref.as_deref().and_then(|r| self.resolve(r, None))),
        }
    }
}

fn is_dimensions(s: &str) -> bool {
    match s.split_once('x') {
        Some((w, h)) => {
            !w.is_empty()
                && !h.is_empty()
                && w.bytes().all(|b| b.is_ascii_digit())
                && h.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> AssetUrlBuilder {
        AssetUrlBuilder::new("https://cdn.sanity.io/", "proj", "production")
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            builder().resolve("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg", None),
            Some(
                "https://cdn.sanity.io/images/proj/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_image_url_with_width() {
        assert_eq!(
            builder().resolve("image-abc-640x480-png", Some(2000)),
            Some("https://cdn.sanity.io/images/proj/production/abc-640x480.png?w=2000".to_string())
        );
    }

    #[test]
    fn test_file_url_ignores_width() {
        assert_eq!(
            builder().resolve("file-9f86d081-mp4", Some(2000)),
            Some("https://cdn.sanity.io/files/proj/production/9f86d081.mp4".to_string())
        );
    }

    #[test]
    fn test_unresolvable_refs() {
        let b = builder();
        assert_eq!(b.resolve("", None), None);
        assert_eq!(b.resolve("image-abc-jpg", None), None);
        assert_eq!(b.resolve("image-abc-wide-jpg", None), None);
        assert_eq!(b.resolve("file-mp4", None), None);
        assert_eq!(b.resolve("sticker-abc-1x1-png", None), None);
    }

    fn entry(kind: Option<MediaKind>, asset_ref: Option<&str>, url: Option<&str>) -> MediaEntry {
        MediaEntry {
            id: "e".to_string(),
            kind,
            asset_ref: asset_ref.map(|s| s.to_string()),
            display_url: url.map(|s| s.to_string()),
            uploader: String::new(),
        }
    }

    #[test]
    fn test_media_url_image_uses_builder() {
        let e = entry(
            Some(MediaKind::Image),
            Some("image-abc-10x10-jpg"),
            Some("https://stored/abc.jpg"),
        );
        assert_eq!(
            builder().media_url(&e, Some(2000)).as_deref(),
            Some("https://cdn.sanity.io/images/proj/production/abc-10x10.jpg?w=2000")
        );
    }

    #[test]
    fn test_media_url_video_uses_stored_url() {
        let e = entry(
            Some(MediaKind::Video),
            Some("file-xyz-mp4"),
            Some("https://stored/xyz.mp4"),
        );
        assert_eq!(
            builder().media_url(&e, Some(2000)).as_deref(),
            Some("https://stored/xyz.mp4")
        );

        let unexpanded = entry(Some(MediaKind::Video), Some("file-xyz-mp4"), None);
        assert_eq!(
            builder().media_url(&unexpanded, None).as_deref(),
            Some("https://cdn.sanity.io/files/proj/production/xyz.mp4")
        );
    }

    #[test]
    fn test_media_url_without_kind() {
        assert_eq!(builder().media_url(&entry(None, None, None), None), None);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let b = builder();
        assert_eq!(
            b.resolve("image-abc-1x1-gif", Some(10)),
            b.resolve("image-abc-1x1-gif", Some(10))
        );
    }
}
