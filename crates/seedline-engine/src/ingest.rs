//! Manual video ingestion
//!
//! Operators paste deliverable links by hand; extraction never hard-fails
//! (it falls back to a timestamp-derived id) and duplicates are rejected on
//! either the extracted id or the raw link string. The OR is deliberate:
//! an AND-based check would be a materially stricter dedup and must not be
//! substituted.

use crate::error::EngineError;
use chrono::{DateTime, Utc};
use seedline_domain::{ContentStage, ContentStatus, PostedVideo};

/// Extract a platform video id from a raw link.
///
/// `/video/<id>?...` style path links and `?v=<id>&...` style query links
/// are recognized; anything else gets a synthesized id derived from `now`.
#[must_use]
pub fn extract_video_id(raw_link: &str, now: DateTime<Utc>) -> String {
    if let Some(idx) = raw_link.find("/video/") {
        let rest = &raw_link[idx + "/video/".len()..];
        let end = rest.find('?').unwrap_or(rest.len());
        return rest[..end].to_string();
    }
    if let Some(idx) = raw_link.find("v=") {
        let rest = &raw_link[idx + 2..];
        let end = rest.find('&').unwrap_or(rest.len());
        return rest[..end].to_string();
    }
    format!("manual-{}", now.timestamp_millis())
}

/// Append a manually entered video to the content record.
///
/// On the first successful add the content stage flips to `Live`. Returns
/// whether this call was that first add, so the caller can fire the
/// influencer-level transition on the same event.
pub fn add_manual_video(
    content: &mut ContentStatus,
    raw_link: &str,
    now: DateTime<Utc>,
) -> Result<bool, EngineError> {
    let link = raw_link.trim();
    if link.is_empty() {
        return Err(EngineError::validation("video link", "must not be empty"));
    }

    let id = extract_video_id(link, now);
    if content
        .posted_videos
        .iter()
        .any(|v| v.id == id || v.link == link)
    {
        return Err(EngineError::Duplicate {
            id,
            link: link.to_string(),
        });
    }

    let first = content.posted_videos.is_empty();
    content.posted_videos.push(PostedVideo {
        id,
        link: link.to_string(),
        date: now,
        is_manual: true,
    });
    if first {
        content.status = ContentStage::Live;
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn extracts_path_style_id() {
        let id = extract_video_id(
            "https://www.tiktok.com/@mia/video/7301?is_from_webapp=1",
            now(),
        );
        assert_eq!(id, "7301");
    }

    #[test]
    fn extracts_path_style_id_without_query() {
        let id = extract_video_id("https://www.tiktok.com/@mia/video/7301", now());
        assert_eq!(id, "7301");
    }

    #[test]
    fn extracts_query_style_id() {
        let id = extract_video_id("https://youtube.com/watch?v=dQw4w&t=42", now());
        assert_eq!(id, "dQw4w");
    }

    #[test]
    fn falls_back_to_timestamp_id() {
        let id = extract_video_id("https://example.com/clip/abc", now());
        assert!(id.starts_with("manual-"));
    }

    #[test]
    fn first_add_flips_content_live() {
        let mut content = ContentStatus::new();
        let first = add_manual_video(&mut content, "https://t.t/@m/video/1", now()).unwrap();
        assert!(first);
        assert_eq!(content.status, ContentStage::Live);
        assert_eq!(content.posted_count(), 1);
    }

    #[test]
    fn second_add_is_not_first() {
        let mut content = ContentStatus::new();
        add_manual_video(&mut content, "https://t.t/@m/video/1", now()).unwrap();
        let first = add_manual_video(&mut content, "https://t.t/@m/video/2", now()).unwrap();
        assert!(!first);
        assert_eq!(content.posted_count(), 2);
    }

    #[test]
    fn duplicate_raw_link_is_rejected() {
        let mut content = ContentStatus::new();
        let link = "https://example.com/clip/abc";
        add_manual_video(&mut content, link, now()).unwrap();
        // Same raw link, even though the synthesized id differs each call.
        let err = add_manual_video(&mut content, link, now()).unwrap_err();
        assert!(matches!(err, EngineError::Duplicate { .. }));
        assert_eq!(content.posted_count(), 1);
    }

    #[test]
    fn duplicate_extracted_id_is_rejected_across_link_forms() {
        let mut content = ContentStatus::new();
        add_manual_video(&mut content, "https://t.t/@m/video/7301", now()).unwrap();
        let err =
            add_manual_video(&mut content, "https://t.t/@m/video/7301?lang=en", now()).unwrap_err();
        assert!(matches!(err, EngineError::Duplicate { .. }));
        assert_eq!(content.posted_count(), 1);
    }

    #[test]
    fn empty_link_is_a_validation_error() {
        let mut content = ContentStatus::new();
        let err = add_manual_video(&mut content, "   ", now()).unwrap_err();
        assert!(matches!(err, EngineError::Validation { .. }));
        assert!(content.posted_videos.is_empty());
    }
}
