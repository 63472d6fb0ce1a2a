use once_cell::sync::Lazy;
use std::path::PathBuf;

pub static CONFIG_PATH: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var("WEDDING_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.yaml"))
});

pub const ENV_PROJECT_ID: &str = "WEDDING_SANITY_PROJECT_ID";
pub const ENV_DATASET: &str = "WEDDING_SANITY_DATASET";
pub const ENV_API_VERSION: &str = "WEDDING_SANITY_API_VERSION";
pub const ENV_TOKEN: &str = "WEDDING_SANITY_TOKEN";

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2023-08-21";
pub const DEFAULT_CDN_HOST: &str = "https://cdn.sanity.io";
pub const DEFAULT_HEADLINE: &str = "Mr & Mrs Hillerud Ahlbäck!";

/// Document type every greeting, photo and video is stored under.
pub const DOCUMENT_TYPE: &str = "greeting";

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Width cards request from the image CDN.
pub const CARD_IMAGE_WIDTH: u32 = 2000;

pub const ANONYMOUS: &str = "Anonymous";

pub const GREETING_REQUIRED: &str = "Greeting cannot be empty.";
pub const PHOTO_REQUIRED: &str = "Photo cannot be empty.";
pub const VIDEO_REQUIRED: &str = "Video cannot be empty.";
pub const SUBMISSION_IN_PROGRESS: &str = "A submission is already in progress.";

pub const GREETING_FAILED: &str = "There was an issue sending your greeting. Please try again.";
pub const PHOTO_FAILED: &str = "There was an issue uploading the photo. Please try again.";
pub const VIDEO_FAILED: &str = "There was an issue uploading the video. Please try again.";

pub const SUBMITTING_LABEL: &str = "Uploading...";
pub const GREETING_SUBMIT_LABEL: &str = "Send";
pub const PHOTO_SUBMIT_LABEL: &str = "Upload Photo";
pub const VIDEO_SUBMIT_LABEL: &str = "Upload Video";

pub const NO_MEDIA: &str = "No photos or videos found.";
pub const NO_GREETINGS: &str = "No greetings found.";
pub const LOADING_GREETINGS: &str = "Loading greetings...";
