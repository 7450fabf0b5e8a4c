//! Payment milestone engine
//!
//! Eligibility is re-derived on every read from the contract and the
//! creator's cumulative posted-video count; it is never cached on the
//! entity.

use crate::error::EngineError;
use seedline_domain::{
    ContractDetails, MilestoneId, MilestoneStatus, PacingConfig, PaymentMilestone,
};

/// Result of evaluating payment eligibility for one creator.
#[derive(Debug, Clone, PartialEq)]
pub enum Eligibility<'a> {
    /// Contract has no milestones; a single boolean against the target
    /// deliverable count.
    Simple {
        /// Whether the target has been met
        eligible: bool,
        /// Contractual deliverable target
        required: u32,
        /// Cumulative posted count evaluated against
        posted: u32,
    },
    /// Contract has milestones; the first non-paid one in list order is
    /// "next" (list order is authoritative, not `video_requirement`).
    NextMilestone {
        /// The next unlockable milestone
        milestone: &'a PaymentMilestone,
        /// Whether the posted count meets its requirement
        eligible: bool,
        /// Videos still missing, zero when eligible
        gap: u32,
    },
    /// Every milestone is paid out
    FullyPaid,
}

impl Eligibility<'_> {
    /// Whether a payout is currently unlockable
    #[inline]
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        match self {
            Self::Simple { eligible, .. } | Self::NextMilestone { eligible, .. } => *eligible,
            Self::FullyPaid => false,
        }
    }
}

/// Compute payment eligibility for a contract given the creator's
/// cumulative posted-video count. Pure; no side effects.
#[must_use]
pub fn compute_eligibility(contract: &ContractDetails, posted_count: u32) -> Eligibility<'_> {
    if contract.milestones.is_empty() {
        return Eligibility::Simple {
            eligible: posted_count >= contract.video_count,
            required: contract.video_count,
            posted: posted_count,
        };
    }
    match contract
        .milestones
        .iter()
        .find(|m| m.status != MilestoneStatus::Paid)
    {
        Some(milestone) => Eligibility::NextMilestone {
            milestone,
            eligible: posted_count >= milestone.video_requirement,
            gap: milestone.video_requirement.saturating_sub(posted_count),
        },
        None => Eligibility::FullyPaid,
    }
}

/// How batch generation treats the existing milestone list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Discard the existing list entirely (dashboard behavior)
    #[default]
    Replace,
    /// Regenerate, then carry `Paid` status forward onto new milestones
    /// with an equal `video_requirement`
    PreservePaid,
}

/// Generate cumulative payment batches from a pacing configuration.
///
/// Replaces the contract's milestone list and records the generating
/// parameters in `pacing_config`. Non-positive pacing inputs are a silent
/// no-op: nothing is replaced and zero is returned. A partial final batch
/// is clamped to the target but still pays the full batch amount.
///
/// Returns the number of batches emitted.
pub fn generate_batch_milestones(
    contract: &mut ContractDetails,
    total_video_target: u32,
    videos_per_batch: u32,
    amount_per_batch: f64,
    strategy: MergeStrategy,
) -> usize {
    if videos_per_batch == 0 || amount_per_batch <= 0.0 {
        return 0;
    }

    let previously_paid: Vec<u32> = contract
        .milestones
        .iter()
        .filter(|m| m.status == MilestoneStatus::Paid)
        .map(|m| m.video_requirement)
        .collect();

    let batches = total_video_target.div_ceil(videos_per_batch);
    let mut milestones = Vec::with_capacity(batches as usize);
    for i in 1..=batches {
        let requirement = (i * videos_per_batch).min(total_video_target);
        let status = if strategy == MergeStrategy::PreservePaid
            && previously_paid.contains(&requirement)
        {
            MilestoneStatus::Paid
        } else {
            MilestoneStatus::Pending
        };
        milestones.push(PaymentMilestone {
            id: MilestoneId::new(),
            label: format!("Batch {i} (Cumulative: {requirement} videos)"),
            amount: amount_per_batch,
            video_requirement: requirement,
            status,
        });
    }

    let count = milestones.len();
    contract.milestones = milestones;
    contract.pacing_config = Some(PacingConfig {
        videos_per_batch,
        amount_per_batch,
        frequency_label: contract
            .pacing_config
            .take()
            .and_then(|c| c.frequency_label),
    });
    tracing::debug!(batches = count, videos_per_batch, "regenerated payment batches");
    count
}

/// Append a blank milestone for manual editing.
///
/// Returns the new milestone's id.
pub fn add_milestone(contract: &mut ContractDetails) -> MilestoneId {
    let milestone = PaymentMilestone::blank();
    let id = milestone.id;
    contract.milestones.push(milestone);
    id
}

/// Remove a milestone by id. Ordering of the remainder is not re-validated.
///
/// Returns whether a milestone was removed.
pub fn remove_milestone(contract: &mut ContractDetails, id: MilestoneId) -> bool {
    let before = contract.milestones.len();
    contract.milestones.retain(|m| m.id != id);
    contract.milestones.len() != before
}

/// Set a milestone's payout state (operator marking a batch paid).
pub fn set_milestone_status(
    contract: &mut ContractDetails,
    id: MilestoneId,
    status: MilestoneStatus,
) -> Result<(), EngineError> {
    let milestone = contract
        .milestones
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| EngineError::validation("milestone", format!("no milestone {id}")))?;
    milestone.status = status;
    Ok(())
}
