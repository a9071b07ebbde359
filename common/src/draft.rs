use thiserror::Error;

use crate::idea::NewIdea;

/// Placeholder identity used until accounts exist.
pub const DEFAULT_USERNAME: &str = "user";

/// Maximum characters accepted by the username field.
pub const USERNAME_MAX_CHARS: usize = 30;
/// Maximum characters accepted by the idea field.
pub const CONTENT_MAX_CHARS: usize = 100;
/// Maximum characters accepted by the description field.
pub const DESCRIPTION_MAX_CHARS: usize = 2000;
/// Above this the description counter is shown as a warning.
pub const DESCRIPTION_WARN_CHARS: usize = 1800;

/// Reasons a draft is rejected before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ユーザー名を入力してください。")]
    EmptyUsername,
    #[error("アイデアを入力してください。")]
    EmptyContent,
}

/// In-progress input for a new idea.
///
/// Setters enforce the character limits by truncation, the same way a
/// `maxlength` attribute does, so a draft can never hold an over-long field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    username: String,
    content: String,
    description: String,
    description_visible: bool,
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

impl Draft {
    pub fn new() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            content: String::new(),
            description: String::new(),
            description_visible: false,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn description_visible(&self) -> bool {
        self.description_visible
    }

    pub fn set_username(&mut self, value: &str) {
        self.username = truncate_chars(value, USERNAME_MAX_CHARS);
    }

    pub fn set_content(&mut self, value: &str) {
        self.content = truncate_chars(value, CONTENT_MAX_CHARS);
    }

    pub fn set_description(&mut self, value: &str) {
        self.description = truncate_chars(value, DESCRIPTION_MAX_CHARS);
    }

    pub fn toggle_description(&mut self) {
        self.description_visible = !self.description_visible;
    }

    /// Characters used in the idea field.
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Characters used in the description field.
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    pub fn description_near_limit(&self) -> bool {
        self.description_len() > DESCRIPTION_WARN_CHARS
    }

    /// Check required fields and build the request body.
    ///
    /// Username is checked before content, so only the first problem is
    /// reported.
    pub fn validate(&self) -> Result<NewIdea, ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(NewIdea::new(
            self.username.clone(),
            self.content.clone(),
            self.description.clone(),
        ))
    }

    /// Reset after a successful post. The username is kept.
    pub fn clear_submitted(&mut self) {
        self.content.clear();
        self.description.clear();
    }
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_defaults() {
        let draft = Draft::new();
        assert_eq!(draft.username(), "user");
        assert_eq!(draft.content(), "");
        assert!(!draft.description_visible());
    }

    #[test]
    fn test_setters_truncate_by_characters() {
        let mut draft = Draft::new();
        draft.set_content(&"あ".repeat(150));
        assert_eq!(draft.content_len(), CONTENT_MAX_CHARS);

        draft.set_description(&"x".repeat(2500));
        assert_eq!(draft.description_len(), DESCRIPTION_MAX_CHARS);
        assert!(draft.description_near_limit());

        draft.set_username(&"n".repeat(40));
        assert_eq!(draft.username().chars().count(), USERNAME_MAX_CHARS);
    }

    #[test]
    fn test_description_warning_threshold() {
        let mut draft = Draft::new();
        draft.set_description(&"x".repeat(1800));
        assert!(!draft.description_near_limit());
        draft.set_description(&"x".repeat(1801));
        assert!(draft.description_near_limit());
    }

    #[test]
    fn test_validate_reports_username_first() {
        let mut draft = Draft::new();
        draft.set_username("   ");
        draft.set_content("");
        assert_eq!(draft.validate(), Err(ValidationError::EmptyUsername));
    }

    #[test]
    fn test_validate_rejects_blank_content() {
        let mut draft = Draft::new();
        draft.set_content(" \n\t ");
        assert_eq!(draft.validate(), Err(ValidationError::EmptyContent));
        assert_eq!(
            ValidationError::EmptyContent.to_string(),
            "アイデアを入力してください。"
        );
    }

    #[test]
    fn test_validate_builds_request() {
        let mut draft = Draft::new();
        draft.set_content("A bike that folds into a backpack");
        draft.set_description("Aluminium frame");
        let idea = draft.validate().unwrap();
        assert_eq!(idea.username, "user");
        assert_eq!(idea.explanation_a, "A bike that folds into a backpack");
        assert_eq!(idea.explanation_b, "");
        assert_eq!(idea.description, "Aluminium frame");
        assert_eq!(idea.likes, 0);
    }

    #[test]
    fn test_clear_submitted_keeps_username() {
        let mut draft = Draft::new();
        draft.set_username("taro");
        draft.set_content("idea");
        draft.set_description("desc");
        draft.toggle_description();
        draft.clear_submitted();
        assert_eq!(draft.username(), "taro");
        assert_eq!(draft.content(), "");
        assert_eq!(draft.description(), "");
        assert!(draft.description_visible());
    }
}
