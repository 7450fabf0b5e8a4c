//! Status enums for the seeding pipeline
//!
//! `InfluencerStatus` is the single source of truth for a creator's pipeline
//! stage. Variant declaration order *is* the pipeline order; the derived `Ord`
//! gives the total order the forward-only transition policy is guarded by.

use serde::{Deserialize, Serialize};

/// Pipeline stage of a creator, from first discovery through final payout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum InfluencerStatus {
    /// Sourced into the pool, not yet contacted
    Discovery,
    /// First outreach sent
    Contacted,
    /// Terms under discussion
    Negotiating,
    /// Creator accepted, contract being drafted
    Approved,
    /// Contract signed
    Contracted,
    /// Product kit shipped
    Shipped,
    /// First deliverable is live
    #[serde(rename = "Content Live")]
    ContentLive,
    /// Content approved, payout pending
    #[serde(rename = "Payment Pending")]
    PaymentPending,
    /// Paid out; terminal
    Paid,
}

impl InfluencerStatus {
    /// Position in the pipeline (0-based)
    #[inline]
    #[must_use]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Whether this stage is terminal (no further transitions)
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid)
    }

    /// All stages in pipeline order
    #[must_use]
    pub fn all() -> [Self; 9] {
        [
            Self::Discovery,
            Self::Contacted,
            Self::Negotiating,
            Self::Approved,
            Self::Contracted,
            Self::Shipped,
            Self::ContentLive,
            Self::PaymentPending,
            Self::Paid,
        ]
    }
}

impl std::fmt::Display for InfluencerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Discovery => "Discovery",
            Self::Contacted => "Contacted",
            Self::Negotiating => "Negotiating",
            Self::Approved => "Approved",
            Self::Contracted => "Contracted",
            Self::Shipped => "Shipped",
            Self::ContentLive => "Content Live",
            Self::PaymentPending => "Payment Pending",
            Self::Paid => "Paid",
        };
        write!(f, "{label}")
    }
}

/// Legacy payout field kept for dashboard compatibility.
///
/// Never stored independently; always derived from [`InfluencerStatus`] via
/// [`crate::Influencer::payment_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// No payout initiated
    Unpaid,
    /// Payout pending release
    Processing,
    /// Payout released
    Paid,
}

/// Contract sub-state, independent of the influencer's pipeline stage
/// (but signing triggers it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    /// Being drafted internally
    Draft,
    /// Sent to the creator
    Sent,
    /// Countersigned
    Signed,
}

/// Product kit shipping state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogisticsStatus {
    /// Not yet shipped
    Pending,
    /// In transit
    Shipped,
    /// Received by the creator
    Delivered,
}

/// Content review stage for a creator's deliverables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentStage {
    /// No draft submitted yet
    #[serde(rename = "Waiting for Draft")]
    WaitingForDraft,
    /// Draft submitted, under review
    #[serde(rename = "Draft Review")]
    DraftReview,
    /// Approved and posted
    #[serde(alias = "Approved")]
    Live,
}

/// Payment milestone state within a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilestoneStatus {
    /// Deliverable threshold not yet met
    Pending,
    /// Threshold met, payout unlockable
    Eligible,
    /// Payout released for this milestone
    Paid,
}
