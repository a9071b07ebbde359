use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Display format for timestamps, e.g. "2025/7/4 9:05:03".
const TIMESTAMP_DISPLAY: &str = "%Y/%-m/%-d %-H:%M:%S";

/// Store-assigned idea identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaId(pub u64);

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An idea as served by the store's `GET /ideas` endpoint.
///
/// Everything except `likes` is owned by the store. The timestamp is kept
/// verbatim and only parsed when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub idea_id: IdeaId,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation_a: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation_b: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation_c: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,
}

impl Idea {
    /// First character of the username, shown in the avatar bubble.
    pub fn avatar_initial(&self) -> String {
        avatar_initial(&self.username)
    }

    /// Parse the store timestamp. Accepts RFC 3339 and naive ISO-8601.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    /// Timestamp formatted for the feed, or the raw string if unparseable.
    ///
    /// Offset timestamps are shown in the offset they carry, not converted
    /// to the viewer's zone.
    pub fn display_timestamp(&self) -> String {
        self.created_at()
            .map(|t| t.format(TIMESTAMP_DISPLAY).to_string())
            .unwrap_or_else(|| self.timestamp.clone())
    }

    /// The non-empty explanation lines, in A, B, C order.
    pub fn explanations(&self) -> impl Iterator<Item = &str> {
        [&self.explanation_a, &self.explanation_b, &self.explanation_c]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// First character of a display name, or an empty string.
pub fn avatar_initial(username: &str) -> String {
    username.chars().next().map(String::from).unwrap_or_default()
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    raw.parse::<NaiveDateTime>()
        .or_else(|_| raw.replacen(' ', "T", 1).parse::<NaiveDateTime>())
        .ok()
}

/// Missing and `null` both mean "nothing here".
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /post/idea`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdea {
    pub username: String,
    pub explanation_a: String,
    pub explanation_b: String,
    pub explanation_c: String,
    pub description: String,
    pub likes: u64,
}

impl NewIdea {
    /// A new idea carrying only the first explanation. B and C are sent empty.
    pub fn new(username: String, content: String, description: String) -> Self {
        Self {
            username,
            explanation_a: content,
            explanation_b: String::new(),
            explanation_c: String::new(),
            description,
            likes: 0,
        }
    }
}

/// Body of `POST /post/create`, sent from the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub idea_id: IdeaId,
    pub username: String,
}
