//! Deliverable content and shipping logistics model

use crate::status::{ContentStage, LogisticsStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One posted deliverable video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedVideo {
    /// Platform video id, extracted from the link or synthesized
    pub id: String,
    /// Raw link as entered/imported
    pub link: String,
    /// When the video was recorded in the dashboard
    pub date: DateTime<Utc>,
    /// True when an operator pasted the link by hand
    pub is_manual: bool,
}

/// Review state plus the append-only posted video list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStatus {
    /// Review stage
    pub status: ContentStage,
    /// Operator sign-off on the content
    pub is_approved: bool,
    /// Posted deliverables, in insertion order. Only ever appended to by
    /// engine operations.
    #[serde(default)]
    pub posted_videos: Vec<PostedVideo>,
}

impl ContentStatus {
    /// Fresh content record: nothing submitted, nothing approved
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: ContentStage::WaitingForDraft,
            is_approved: false,
            posted_videos: Vec::new(),
        }
    }

    /// Cumulative posted deliverable count
    #[inline]
    #[must_use]
    pub fn posted_count(&self) -> u32 {
        u32::try_from(self.posted_videos.len()).unwrap_or(u32::MAX)
    }
}

impl Default for ContentStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Shipping state for the product kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logistics {
    /// Shipping state
    pub status: LogisticsStatus,
    /// Carrier name, populated once shipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Tracking number, populated once shipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

impl Logistics {
    /// Nothing shipped yet
    #[must_use]
    pub fn pending() -> Self {
        Self {
            status: LogisticsStatus::Pending,
            carrier: None,
            tracking_number: None,
        }
    }
}

impl Default for Logistics {
    fn default() -> Self {
        Self::pending()
    }
}
