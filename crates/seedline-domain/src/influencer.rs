//! The campaign participant entity

use crate::contract::ContractDetails;
use crate::content::{ContentStatus, Logistics};
use crate::ids::InfluencerId;
use crate::message::ChatMessage;
use crate::status::{InfluencerStatus, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Social platform the creator publishes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// TikTok (enables TikTok Shop fee on the contract)
    TikTok,
    /// Instagram
    Instagram,
    /// YouTube
    YouTube,
}

/// A creator engaged (or being engaged) for a seeding campaign.
///
/// `status` is the single source of truth for the pipeline stage. The legacy
/// dashboard fields `paymentStatus` and `category` are exposed as derived
/// accessors so they can never drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influencer {
    /// Entity identifier
    pub id: InfluencerId,
    /// Platform handle ("@handle")
    pub handle: String,
    /// Display name
    pub name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// ISO country code
    #[serde(default)]
    pub country: String,
    /// Content categories, first entry is the primary one
    #[serde(default)]
    pub categories: Vec<String>,
    /// Follower count, informational only
    #[serde(default)]
    pub follower_count: u64,
    /// Publishing platform
    pub platform: Platform,
    /// Pipeline stage
    pub status: InfluencerStatus,
    /// Contract terms
    pub contract: ContractDetails,
    /// Kit shipping state
    pub logistics: Logistics,
    /// Deliverable review state and posted videos
    pub content: ContentStatus,
    /// Append-only outreach/note history
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    /// When the creator was added to the pool
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Influencer {
    /// Create a creator in `Discovery` with a draft contract and empty
    /// history/video list.
    #[must_use]
    pub fn new(handle: impl Into<String>, name: impl Into<String>, platform: Platform) -> Self {
        let now = Utc::now();
        Self {
            id: InfluencerId::new(),
            handle: handle.into(),
            name: name.into(),
            email: String::new(),
            country: String::new(),
            categories: Vec::new(),
            follower_count: 0,
            platform,
            status: InfluencerStatus::Discovery,
            contract: ContractDetails::draft(),
            logistics: Logistics::pending(),
            content: ContentStatus::new(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// With email
    #[inline]
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// With country
    #[inline]
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// With categories
    #[inline]
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// With follower count
    #[inline]
    #[must_use]
    pub fn with_followers(mut self, count: u64) -> Self {
        self.follower_count = count;
        self
    }

    /// Legacy payout field, derived from `status`.
    #[inline]
    #[must_use]
    pub fn payment_status(&self) -> PaymentStatus {
        match self.status {
            InfluencerStatus::Paid => PaymentStatus::Paid,
            InfluencerStatus::PaymentPending => PaymentStatus::Processing,
            _ => PaymentStatus::Unpaid,
        }
    }

    /// Legacy scalar category field, derived from `categories`.
    #[inline]
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Cumulative posted deliverable count
    #[inline]
    #[must_use]
    pub fn posted_count(&self) -> u32 {
        self.content.posted_count()
    }

    /// Stamp `updated_at`; engine operations call this after any mutation
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
