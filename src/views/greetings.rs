use tracing::{info, warn};

use crate::constants::{LOADING_GREETINGS, NO_GREETINGS};
use crate::error::AppResult;
use crate::forms::GreetingForm;
use crate::logging::log_error;
use crate::models::{GreetingEntry, StoredDocument};
use crate::render::{greeting_cards, greeting_image_url, GreetingCard};
use crate::store::AssetUrlBuilder;
use crate::views::{LoadStatus, Outcome, Task};

/// The greeting wall with its submission form and a plain image viewer.
#[derive(Debug, Clone)]
pub struct GreetingsView {
    status: LoadStatus,
    greetings: Vec<GreetingEntry>,
    form: GreetingForm,
    viewer_url: Option<String>,
    urls: AssetUrlBuilder,
}

impl GreetingsView {
    pub fn new(urls: AssetUrlBuilder) -> Self {
        Self {
            status: LoadStatus::Loading,
            greetings: Vec::new(),
            form: GreetingForm::new(),
            viewer_url: None,
            urls,
        }
    }

    pub fn load(&mut self) -> Task {
        self.status = LoadStatus::Loading;
        Task::LoadGreetings
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn greetings(&self) -> &[GreetingEntry] {
        &self.greetings
    }

    pub fn form(&self) -> &GreetingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut GreetingForm {
        &mut self.form
    }

    pub fn cards(&self) -> Vec<GreetingCard> {
        greeting_cards(&self.greetings, &self.urls)
    }

    /// Loading notice or empty-state text, when there is nothing to list.
    pub fn status_message(&self) -> Option<&'static str> {
        if !self.greetings.is_empty() {
            None
        } else if self.status == LoadStatus::Loading {
            Some(LOADING_GREETINGS)
        } else {
            Some(NO_GREETINGS)
        }
    }

    pub fn submit(&mut self) -> Option<Task> {
        self.form.begin().ok().map(Task::SubmitGreeting)
    }

    /// Show the image of the greeting at `index` full size.
    pub fn open_image(&mut self, index: usize) {
        if let Some(url) = self
            .greetings
            .get(index)
            .and_then(|g| greeting_image_url(g, &self.urls, None))
        {
            self.viewer_url = Some(url);
        }
    }

    pub fn close_image(&mut self) {
        self.viewer_url = None;
    }

    pub fn viewer_url(&self) -> Option<&str> {
        self.viewer_url.as_deref()
    }

    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::GreetingsLoaded(result) => self.apply_loaded(result),
            Outcome::GreetingPosted(result) => {
                if let Some(entry) = self.form.finish(result) {
                    self.greetings.insert(0, entry);
                }
            }
            other => warn!("Greetings ignoring {:?}", other),
        }
    }

    fn apply_loaded(&mut self, result: AppResult<Vec<StoredDocument>>) {
        match result {
            Ok(documents) => {
                self.greetings = documents
                    .into_iter()
                    .filter_map(GreetingEntry::from_document)
                    .collect();
                info!("Fetched {} greetings", self.greetings.len());
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                log_error("Fetch greetings failed", &e);
                self.greetings.clear();
                self.status = LoadStatus::Failed;
            }
        }
    }
}
