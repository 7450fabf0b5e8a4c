//! Seedline persistence boundary
//!
//! The engine never issues queries itself: it is handed an entity,
//! transforms it, and the caller persists the result through this
//! contract. Concurrency is the store's concern; this core assumes
//! last-writer-wins and leaves optimistic concurrency to production
//! implementations at the storage boundary.

#![warn(unreachable_pub)]

pub mod bulk;
pub mod memory;

pub use bulk::{bulk_delete, bulk_outreach, BulkError, BulkReport};
pub use memory::{MemoryStore, StoreStats};

use async_trait::async_trait;
use seedline_domain::{Influencer, InfluencerId, InfluencerStatus};

/// Store-level errors. Network/permission failures from real backends are
/// surfaced through `Backend`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No influencer with this id
    #[error("influencer not found: {0}")]
    NotFound(InfluencerId),

    /// Backend failure (network, permission, ...)
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Listing filter; `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct InfluencerFilter {
    /// Match a pipeline stage
    pub status: Option<InfluencerStatus>,
    /// Match a country code
    pub country: Option<String>,
    /// Match creators carrying this category
    pub category: Option<String>,
}

impl InfluencerFilter {
    /// Filter matching every influencer
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict to one pipeline stage
    #[must_use]
    pub fn with_status(mut self, status: InfluencerStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether an influencer passes this filter
    #[must_use]
    pub fn matches(&self, influencer: &Influencer) -> bool {
        if let Some(status) = self.status {
            if influencer.status != status {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if &influencer.country != country {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !influencer.categories.iter().any(|c| c == category) {
                return false;
            }
        }
        true
    }
}

/// Persistence contract consumed by the dashboard layer.
///
/// `put` is last-writer-wins: concurrent edits to the same document are a
/// lost-update risk this core does not resolve.
#[async_trait]
pub trait InfluencerStore: Send + Sync {
    /// Fetch one influencer
    async fn get(&self, id: InfluencerId) -> Result<Influencer, StoreError>;

    /// List influencers passing the filter
    async fn list(&self, filter: &InfluencerFilter) -> Result<Vec<Influencer>, StoreError>;

    /// Durably store an influencer, overwriting any existing document
    async fn put(&self, influencer: Influencer) -> Result<(), StoreError>;

    /// Remove an influencer. Administrative action, not a lifecycle
    /// transition.
    async fn delete(&self, id: InfluencerId) -> Result<(), StoreError>;
}
