//! Bulk operations over selected creators
//!
//! A bulk operation is a sequence of independent per-entity updates with
//! no transactional semantics: on the first failure the already-updated
//! prefix stays updated and the rest is left unprocessed. Retry is the
//! caller's choice, per entity.

use crate::{InfluencerStore, StoreError};
use seedline_domain::InfluencerId;
use seedline_engine::{EngineError, LifecycleEngine};

/// Why a bulk operation stopped at one entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BulkError {
    /// Store read/write failed
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Engine rejected the update
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Outcome of a bulk operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkReport {
    /// Entities updated before any failure, in order
    pub applied: Vec<InfluencerId>,
    /// The entity that failed, if any
    pub failed: Option<(InfluencerId, BulkError)>,
    /// Entities left unprocessed after the failure
    pub unprocessed: Vec<InfluencerId>,
}

impl BulkReport {
    /// Whether every entity was updated
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_none()
    }
}

fn report_from(
    applied: Vec<InfluencerId>,
    failed: Option<(InfluencerId, BulkError)>,
    remaining: &[InfluencerId],
) -> BulkReport {
    BulkReport {
        applied,
        failed,
        unprocessed: remaining.to_vec(),
    }
}

/// Send the same outreach template to each selected creator, one at a
/// time, persisting each updated entity before moving on.
pub async fn bulk_outreach(
    store: &dyn InfluencerStore,
    engine: &LifecycleEngine,
    ids: &[InfluencerId],
    sender: &str,
    template: &str,
) -> BulkReport {
    let mut applied = Vec::with_capacity(ids.len());
    for (pos, &id) in ids.iter().enumerate() {
        let step = async {
            let mut influencer = store.get(id).await?;
            engine.record_outreach(&mut influencer, sender, template)?;
            store.put(influencer).await?;
            Ok::<(), BulkError>(())
        };
        if let Err(err) = step.await {
            tracing::warn!(influencer = %id, %err, "bulk outreach stopped");
            return report_from(applied, Some((id, err)), &ids[pos + 1..]);
        }
        applied.push(id);
    }
    report_from(applied, None, &[])
}

/// Delete each selected creator, one at a time.
pub async fn bulk_delete(store: &dyn InfluencerStore, ids: &[InfluencerId]) -> BulkReport {
    let mut applied = Vec::with_capacity(ids.len());
    for (pos, &id) in ids.iter().enumerate() {
        if let Err(err) = store.delete(id).await {
            tracing::warn!(influencer = %id, %err, "bulk delete stopped");
            return report_from(applied, Some((id, err.into())), &ids[pos + 1..]);
        }
        applied.push(id);
    }
    report_from(applied, None, &[])
}
