//! In-memory reference store
//!
//! Backs tests and the reporting layer. Documents live in a `DashMap`;
//! write statistics sit behind a `parking_lot` mutex.

use crate::{InfluencerFilter, InfluencerStore, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use seedline_domain::{Influencer, InfluencerId};

/// Write statistics for a [`MemoryStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Total `put` calls
    pub puts: usize,
    /// Total `delete` calls that removed a document
    pub deletes: usize,
}

/// In-memory [`InfluencerStore`], last-writer-wins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: DashMap<InfluencerId, Influencer>,
    stats: Mutex<StoreStats>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored influencers
    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Snapshot of write statistics
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        *self.stats.lock()
    }
}

#[async_trait]
impl InfluencerStore for MemoryStore {
    async fn get(&self, id: InfluencerId) -> Result<Influencer, StoreError> {
        self.docs
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, filter: &InfluencerFilter) -> Result<Vec<Influencer>, StoreError> {
        let mut result: Vec<Influencer> = self
            .docs
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        // DashMap iteration order is arbitrary; callers get a stable view.
        result.sort_by_key(|i| i.id);
        Ok(result)
    }

    async fn put(&self, influencer: Influencer) -> Result<(), StoreError> {
        tracing::debug!(influencer = %influencer.id, status = %influencer.status, "put");
        self.docs.insert(influencer.id, influencer);
        self.stats.lock().puts += 1;
        Ok(())
    }

    async fn delete(&self, id: InfluencerId) -> Result<(), StoreError> {
        match self.docs.remove(&id) {
            Some(_) => {
                self.stats.lock().deletes += 1;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use seedline_domain::{InfluencerStatus, Platform};
    use seedline_test_utils::creator_fixture;

    #[tokio::test]
    async fn put_get_round_trip() {
        seedline_test_utils::init_tracing();
        let store = MemoryStore::new();
        let creator = creator_fixture();
        let id = creator.id;
        store.put(creator.clone()).await.unwrap();
        let loaded = store.get(id).await.unwrap();
        assert_eq!(creator, loaded);
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let store = MemoryStore::new();
        let id = InfluencerId::new();
        assert_eq!(store.get(id).await.unwrap_err(), StoreError::NotFound(id));
    }

    #[tokio::test]
    async fn put_is_last_writer_wins() {
        let store = MemoryStore::new();
        let mut creator = creator_fixture();
        store.put(creator.clone()).await.unwrap();
        creator.status = InfluencerStatus::Contacted;
        store.put(creator.clone()).await.unwrap();
        let loaded = store.get(creator.id).await.unwrap();
        assert_eq!(loaded.status, InfluencerStatus::Contacted);
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().puts, 2);
    }

    #[tokio::test]
    async fn list_applies_filter() {
        let store = MemoryStore::new();
        let us = Influencer::new("@a", "A", Platform::TikTok).with_country("US");
        let de = Influencer::new("@b", "B", Platform::Instagram).with_country("DE");
        store.put(us.clone()).await.unwrap();
        store.put(de).await.unwrap();

        let filter = InfluencerFilter {
            country: Some("US".into()),
            ..InfluencerFilter::default()
        };
        let listed = store.list(&filter).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, us.id);
        assert_eq!(store.list(&InfluencerFilter::any()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_document() {
        let store = MemoryStore::new();
        let creator = creator_fixture();
        let id = creator.id;
        store.put(creator).await.unwrap();
        store.delete(id).await.unwrap();
        assert!(store.is_empty());
        assert_eq!(store.delete(id).await.unwrap_err(), StoreError::NotFound(id));
    }
}
