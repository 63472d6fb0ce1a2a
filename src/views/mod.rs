mod album;
mod greetings;
mod home;

use serde::Serialize;

use crate::error::AppResult;
use crate::forms::{GreetingSubmission, MediaSubmission};
use crate::models::{GreetingEntry, MediaEntry, StoredDocument};
use crate::store::{MediaQuery, MediaStore};

pub use album::AlbumView;
pub use greetings::GreetingsView;
pub use home::HomeView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

/// Store work a view asked for. Owns everything it needs, so the view stays
/// usable while it runs.
#[derive(Debug)]
pub enum Task {
    LoadAlbum,
    LoadGreetings,
    SubmitPhoto(MediaSubmission),
    SubmitVideo(MediaSubmission),
    SubmitGreeting(GreetingSubmission),
}

/// Result of a finished `Task`, handed back to the view that asked.
#[derive(Debug)]
pub enum Outcome {
    AlbumLoaded(AppResult<Vec<StoredDocument>>),
    GreetingsLoaded(AppResult<Vec<StoredDocument>>),
    PhotoPosted(AppResult<MediaEntry>),
    VideoPosted(AppResult<MediaEntry>),
    GreetingPosted(AppResult<GreetingEntry>),
}

impl Task {
    pub async fn run(self, store: &dyn MediaStore) -> Outcome {
        match self {
            Task::LoadAlbum => Outcome::AlbumLoaded(store.query(MediaQuery::Gallery).await),
            Task::LoadGreetings => {
                Outcome::GreetingsLoaded(store.query(MediaQuery::Greetings).await)
            }
            Task::SubmitPhoto(submission) => Outcome::PhotoPosted(submission.send(store).await),
            Task::SubmitVideo(submission) => Outcome::VideoPosted(submission.send(store).await),
            Task::SubmitGreeting(submission) => {
                Outcome::GreetingPosted(submission.send(store).await)
            }
        }
    }
}
