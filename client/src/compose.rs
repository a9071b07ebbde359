//! The "post an idea" form.

use ideaboard_common::draft::{CONTENT_MAX_CHARS, DESCRIPTION_MAX_CHARS};
use ideaboard_common::{Draft, NewIdea, StoreError};
use tracing::warn;

use crate::store::IdeaStore;

/// Shown when the store rejects a post.
pub const POST_FAILED: &str = "ツイートの投稿に失敗しました。";

/// Owned state behind the compose form: the draft and one error line.
#[derive(Clone, Debug, Default)]
pub struct CompositionView {
    draft: Draft,
    error: Option<String>,
}

impl CompositionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_username(&mut self, value: &str) {
        self.draft.set_username(value);
    }

    pub fn set_content(&mut self, value: &str) {
        self.draft.set_content(value);
    }

    pub fn set_description(&mut self, value: &str) {
        self.draft.set_description(value);
    }

    pub fn toggle_description(&mut self) {
        self.draft.toggle_description();
    }

    /// "n/100" under the idea field.
    pub fn content_counter(&self) -> String {
        format!("{}/{}", self.draft.content_len(), CONTENT_MAX_CHARS)
    }

    /// "n/2000" under the description field.
    pub fn description_counter(&self) -> String {
        format!("{}/{}", self.draft.description_len(), DESCRIPTION_MAX_CHARS)
    }

    /// Label for the description toggle button.
    pub fn toggle_label(&self) -> &'static str {
        if self.draft.description_visible() {
            "詳細を隠す"
        } else {
            "詳細を追加"
        }
    }

    /// Start a submission: clear the error and validate.
    ///
    /// `None` means validation failed and the error is set; nothing should
    /// be sent.
    pub fn prepare(&mut self) -> Option<NewIdea> {
        self.error = None;
        match self.draft.validate() {
            Ok(idea) => Some(idea),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply the store's answer to a prepared submission.
    ///
    /// On success the idea and description are cleared (the username is
    /// kept). On failure every field is left as typed. Returns whether the
    /// post succeeded.
    pub fn finish(&mut self, result: Result<(), StoreError>) -> bool {
        match result {
            Ok(()) => {
                self.draft.clear_submitted();
                self.error = None;
                true
            }
            Err(e) => {
                warn!(kind = e.kind(), "Post failed: {e}");
                self.error = Some(submission_error(&e));
                false
            }
        }
    }

    /// Validate, post, and call `on_success` if the store accepted it.
    pub async fn submit<S, F>(&mut self, store: &S, on_success: F) -> bool
    where
        S: IdeaStore,
        F: FnOnce(),
    {
        let Some(idea) = self.prepare() else {
            return false;
        };
        let result = store.create_idea(&idea).await;
        let posted = self.finish(result);
        if posted {
            on_success();
        }
        posted
    }
}

fn submission_error(err: &StoreError) -> String {
    match err {
        StoreError::Http { .. } => POST_FAILED.to_string(),
        other => other.to_string(),
    }
}
