use serde::Serialize;
use tracing::debug;

use crate::gallery::{Swipe, SwipeTracker};
use crate::models::{MediaEntry, MediaKind};
use crate::store::AssetUrlBuilder;

/// What the lightbox shows. `open_index` is set exactly while it is open.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryViewState {
    pub open_index: Option<usize>,
    pub display_url: Option<String>,
    pub display_kind: Option<MediaKind>,
}

impl GalleryViewState {
    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }
}

/// Where a click inside the lightbox landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    PrevArrow,
    NextArrow,
    Media,
}

/// The album's entry list plus the lightbox over it.
#[derive(Debug, Clone)]
pub struct GalleryController {
    entries: Vec<MediaEntry>,
    view: GalleryViewState,
    swipe: SwipeTracker,
    urls: AssetUrlBuilder,
}

impl GalleryController {
    pub fn new(urls: AssetUrlBuilder) -> Self {
        Self {
            entries: Vec::new(),
            view: GalleryViewState::default(),
            swipe: SwipeTracker::default(),
            urls,
        }
    }

    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    pub fn view(&self) -> &GalleryViewState {
        &self.view
    }

    pub fn is_open(&self) -> bool {
        self.view.is_open()
    }

    pub fn urls(&self) -> &AssetUrlBuilder {
        &self.urls
    }

    /// Install a freshly loaded collection. Any open item is closed.
    pub fn replace(&mut self, entries: Vec<MediaEntry>) {
        self.entries = entries;
        self.close();
    }

    /// Insert a new entry at the front, keeping the lightbox on the item it
    /// was showing.
    pub fn prepend(&mut self, entry: MediaEntry) {
        self.entries.insert(0, entry);
        if let Some(index) = self.view.open_index {
            self.view.open_index = Some(index + 1);
        }
    }

    pub fn open(&mut self, index: usize, url: Option<String>, kind: Option<MediaKind>) {
        if index >= self.entries.len() {
            debug!("Ignoring open of index {} past {}", index, self.entries.len());
            return;
        }
        self.view = GalleryViewState {
            open_index: Some(index),
            display_url: url,
            display_kind: kind,
        };
    }

    /// Open the entry at `index` at full size.
    pub fn open_entry(&mut self, index: usize) {
        if let Some(view) = self.view_for(index) {
            self.view = view;
        }
    }

    pub fn next(&mut self) {
        self.step(|index, len| (index + 1) % len);
    }

    pub fn prev(&mut self) {
        self.step(|index, len| (index + len - 1) % len);
    }

    pub fn close(&mut self) {
        self.view = GalleryViewState::default();
    }

    pub fn touch_start(&mut self, x: f32) {
        self.swipe.touch_start(x);
    }

    pub fn touch_move(&mut self, x: f32) {
        self.swipe.touch_move(x);
    }

    /// Finish a touch; a long enough horizontal swipe navigates.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let swipe = self.swipe.touch_end();
        match swipe {
            Some(Swipe::Left) => self.next(),
            Some(Swipe::Right) => self.prev(),
            None => {}
        }
        swipe
    }

    /// Arrow clicks stay with the arrows; only the backdrop closes.
    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Backdrop => self.close(),
            ClickTarget::PrevArrow => self.prev(),
            ClickTarget::NextArrow => self.next(),
            ClickTarget::Media => {}
        }
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) {
        let Some(index) = self.view.open_index else {
            return;
        };
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        if let Some(view) = self.view_for(advance(index, len)) {
            self.view = view;
        }
    }

    fn view_for(&self, index: usize) -> Option<GalleryViewState> {
        let entry = self.entries.get(index)?;
        Some(GalleryViewState {
            open_index: Some(index),
            display_url: self.urls.media_url(entry, None),
            display_kind: entry.kind,
        })
    }
}
