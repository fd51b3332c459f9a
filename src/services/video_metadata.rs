//! Video URL inspection.
//!
//! Recognizes YouTube watch/embed/short links, extracts the 11-character video
//! id and derives the thumbnail URL used to pre-fill new bookmarks. Nothing is
//! fetched over the network.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::bookmark::{non_blank, BookmarkDraft};

const VIDEO_ID_PATTERN: &str =
    r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#;

/// What can be derived locally from a video URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub video_id: String,
    pub thumbnail: String,
}

fn video_id_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VIDEO_ID_PATTERN).ok()).as_ref()
}

/// Whether the URL points at a supported video host.
pub fn is_video_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// Extracts the video id from a supported URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id_regex()?
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Full-resolution thumbnail for a video id.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}

/// Inspects a URL, returning the id and thumbnail when it is a recognized video.
pub fn inspect(url: &str) -> Option<VideoMetadata> {
    if !is_video_url(url) {
        return None;
    }
    let video_id = extract_video_id(url)?;
    let thumbnail = thumbnail_url(&video_id);
    Some(VideoMetadata {
        video_id,
        thumbnail,
    })
}

/// Fills a blank draft thumbnail from the draft's URL. Other fields are left alone.
pub fn prefill(mut draft: BookmarkDraft) -> BookmarkDraft {
    if non_blank(draft.thumbnail.clone()).is_none() {
        if let Some(meta) = inspect(&draft.url) {
            draft.thumbnail = Some(meta.thumbnail);
        }
    }
    draft
}
