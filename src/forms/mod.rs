//! Guest submission forms.
//!
//! Every form runs in three steps so no view state is borrowed while the store
//! is working: `begin` validates and snapshots the draft, `send` talks to the
//! store, and `finish` applies the outcome. `finish` always clears the
//! submitting flag.

mod greeting;
mod media;

use serde::Serialize;
use tracing::warn;

use crate::constants::{ANONYMOUS, SUBMISSION_IN_PROGRESS, SUBMITTING_LABEL};
use crate::error::{AppError, AppResult};

pub use greeting::{GreetingForm, GreetingSubmission};
pub use media::{MediaForm, MediaSubmission};

/// Submit button and inline error of one form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitState {
    submitting: bool,
    error: Option<String>,
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn button_label<'a>(&self, idle: &'a str) -> &'a str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            idle
        }
    }

    /// Start an attempt. A previous attempt's message never outlives it.
    fn start(&mut self) -> AppResult<()> {
        if self.submitting {
            return Err(AppError::Validation(SUBMISSION_IN_PROGRESS.to_string()));
        }
        self.error = None;
        Ok(())
    }

    fn reject(&mut self, message: &str) -> AppError {
        warn!("Submission rejected: {}", message);
        self.error = Some(message.to_string());
        AppError::Validation(message.to_string())
    }

    fn mark_submitting(&mut self) {
        self.submitting = true;
    }

    fn settle(&mut self, failure: Option<&str>) {
        self.submitting = false;
        self.error = failure.map(|m| m.to_string());
    }
}

pub fn uploader_or_anonymous(name: &str) -> String {
    if name.trim().is_empty() {
        ANONYMOUS.to_string()
    } else {
        name.to_string()
    }
}
