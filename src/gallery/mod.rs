mod controller;
mod gesture;
mod shuffle;

pub use controller::{ClickTarget, GalleryController, GalleryViewState};
pub use gesture::{Swipe, SwipeTracker};
pub use shuffle::Shuffler;
