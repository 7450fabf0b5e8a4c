//! Effect emission
//!
//! Engine operations never reach into the UI; instead they return the list
//! of notification-worthy consequences and the form layer translates them
//! into toasts, badge updates, and the like.

use seedline_domain::{InfluencerStatus, PaymentStatus};

/// A notification-worthy consequence of applying a field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The pipeline stage moved
    StatusChanged {
        /// Stage before the update
        from: InfluencerStatus,
        /// Stage after the update
        to: InfluencerStatus,
    },
    /// The derived legacy payout field moved
    PaymentStatusChanged {
        /// Derived payout state before
        from: PaymentStatus,
        /// Derived payout state after
        to: PaymentStatus,
    },
    /// The first deliverable went live
    ContentWentLive,
    /// The milestone list was regenerated from a pacing config
    MilestonesGenerated {
        /// Number of batches emitted
        count: usize,
    },
    /// A history entry was appended
    MessageLogged {
        /// True for internal notes, false for outreach
        internal: bool,
    },
}

/// The status change contained in an effect list, if any.
///
/// Engine operations emit at most one `StatusChanged` per call.
#[must_use]
pub fn status_change(effects: &[Effect]) -> Option<(InfluencerStatus, InfluencerStatus)> {
    effects.iter().find_map(|e| match e {
        Effect::StatusChanged { from, to } => Some((*from, *to)),
        _ => None,
    })
}
