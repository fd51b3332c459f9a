// vidmark seed data
// Sample bookmarks used when storage holds no bookmark collection.

use chrono::{DateTime, TimeZone, Utc};

use super::video_metadata::thumbnail_url;
use crate::types::bookmark::VideoBookmark;

fn day(year: i32, month: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, d, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    video: &str,
    channel: &str,
    description: &str,
    category: &str,
    duration: &str,
    added: DateTime<Utc>,
    rating: u8,
) -> VideoBookmark {
    VideoBookmark {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://www.youtube.com/watch?v={}", video),
        channel: Some(channel.to_string()),
        description: Some(description.to_string()),
        category: category.to_string(),
        thumbnail: Some(thumbnail_url(video)),
        duration: Some(duration.to_string()),
        date_added: added,
        rating,
    }
}

/// The three sample bookmarks, newest first.
pub fn sample_bookmarks() -> Vec<VideoBookmark> {
    vec![
        sample(
            "1",
            "React Tutorial for Beginners",
            "dGcsHMXbSOA",
            "Programming with Mosh",
            "Complete React tutorial for beginners",
            "Tech",
            "2:30:45",
            day(2024, 1, 15),
            4,
        ),
        sample(
            "2",
            "JavaScript ES6 Features",
            "NCwa_xi0Uuc",
            "Traversy Media",
            "Modern JavaScript features explained",
            "Tech",
            "1:45:20",
            day(2024, 1, 10),
            5,
        ),
        sample(
            "3",
            "Relaxing Piano Music",
            "jfKfPfyJRdk",
            "Peaceful Piano",
            "Beautiful piano music for relaxation",
            "Music",
            "3:00:00",
            day(2024, 1, 8),
            3,
        ),
    ]
}
