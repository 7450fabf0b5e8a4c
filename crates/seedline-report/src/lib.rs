//! Seedline reporting
//!
//! Read-only aggregates over the current entity list: counts per pipeline
//! stage, contracted and paid totals, and per-creator eligibility rows.
//! Everything is re-derived on each call (eligibility via
//! [`seedline_engine::compute_eligibility`]); nothing is stored
//! redundantly.

#![warn(unreachable_pub)]

use seedline_domain::{Influencer, InfluencerId, InfluencerStatus, MilestoneStatus, PaymentStatus};
use seedline_engine::{compute_eligibility, Eligibility};
use serde::Serialize;
use std::collections::BTreeMap;

/// Pipeline-wide aggregate counts and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSummary {
    /// Total creators in the pool
    pub total: usize,
    /// Creators per pipeline stage
    pub by_status: BTreeMap<InfluencerStatus, usize>,
    /// Sum of contract values across the pool
    pub contracted_amount: f64,
    /// Sum of contract values for fully paid creators
    pub paid_amount: f64,
}

impl PipelineSummary {
    /// Creators at one stage
    #[must_use]
    pub fn count(&self, status: InfluencerStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// One creator's payment-eligibility row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityRow {
    /// Creator id
    pub influencer: InfluencerId,
    /// Creator handle, for display
    pub handle: String,
    /// Whether a payout is currently unlockable
    pub eligible: bool,
    /// Label of the next unlockable milestone, if the contract has one
    pub next_milestone: Option<String>,
    /// Videos still missing toward the next unlock
    pub gap: u32,
    /// Milestones already paid out
    pub paid_milestones: usize,
    /// Amount already paid out across milestones
    pub paid_milestone_amount: f64,
    /// Deliverable progress percentage, clamped to 100
    pub progress_pct: f64,
}

/// Deliverable progress percentage, clamped to 100. A zero target counts
/// as complete.
#[must_use]
pub fn progress_pct(posted: u32, target: u32) -> f64 {
    if target == 0 {
        return 100.0;
    }
    (f64::from(posted) / f64::from(target) * 100.0).min(100.0)
}

/// Aggregate the current entity list into a pipeline summary.
#[must_use]
pub fn pipeline_summary(influencers: &[Influencer]) -> PipelineSummary {
    let mut by_status = BTreeMap::new();
    let mut contracted_amount = 0.0;
    let mut paid_amount = 0.0;
    for influencer in influencers {
        *by_status.entry(influencer.status).or_insert(0) += 1;
        contracted_amount += influencer.contract.total_amount;
        if influencer.payment_status() == PaymentStatus::Paid {
            paid_amount += influencer.contract.total_amount;
        }
    }
    PipelineSummary {
        total: influencers.len(),
        by_status,
        contracted_amount,
        paid_amount,
    }
}

/// Per-creator eligibility rows, re-derived from contract and content
/// state on every call.
#[must_use]
pub fn eligibility_rows(influencers: &[Influencer]) -> Vec<EligibilityRow> {
    influencers
        .iter()
        .map(|influencer| {
            let posted = influencer.posted_count();
            let (eligible, next_milestone, gap) =
                match compute_eligibility(&influencer.contract, posted) {
                    Eligibility::Simple { eligible, .. } => (eligible, None, 0),
                    Eligibility::NextMilestone {
                        milestone,
                        eligible,
                        gap,
                    } => (eligible, Some(milestone.label.clone()), gap),
                    Eligibility::FullyPaid => (false, None, 0),
                };
            let paid_milestones = influencer
                .contract
                .milestones
                .iter()
                .filter(|m| m.status == MilestoneStatus::Paid)
                .count();
            EligibilityRow {
                influencer: influencer.id,
                handle: influencer.handle.clone(),
                eligible,
                next_milestone,
                gap,
                paid_milestones,
                paid_milestone_amount: influencer.contract.paid_milestone_amount(),
                progress_pct: progress_pct(posted, influencer.contract.video_count),
            }
        })
        .collect()
}
