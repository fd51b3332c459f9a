use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Highest star rating a bookmark can carry.
pub const MAX_RATING: u8 = 5;

/// Represents a saved video bookmark.
///
/// Field names follow the persisted JSON schema (`dateAdded`), and every optional
/// field defaults when absent so records written by older versions still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub date_added: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: u8,
}

/// Reads any stored number (or `null`) and clamps it, so one out-of-range
/// rating cannot make the whole collection undecodable.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(clamp_rating(raw.round() as i64))
}

/// User input for a new bookmark, as submitted by an add form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub channel: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<i64>,
}

impl BookmarkDraft {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_channel(mut self, channel: &str) -> Self {
        self.channel = Some(channel.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Partial update for an existing bookmark. `None` leaves a field untouched.
///
/// `id` and `dateAdded` are absent: they never change after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub channel: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<i64>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Clamps an arbitrary rating into `0..=MAX_RATING`.
pub fn clamp_rating(rating: i64) -> u8 {
    rating.clamp(0, MAX_RATING as i64) as u8
}

/// Converts an optional form string into `None` when blank.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
