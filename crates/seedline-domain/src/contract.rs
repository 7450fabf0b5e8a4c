//! Contract and payment milestone model

use crate::ids::MilestoneId;
use crate::status::{ContractStatus, MilestoneStatus};
use serde::{Deserialize, Serialize};

/// Payment schedule agreed in the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentSchedule {
    /// Single payout when all deliverables are in
    #[serde(rename = "Upon Completion")]
    UponCompletion,
    /// Weekly payout cadence
    Weekly,
    /// Net-30 invoice terms
    Net30,
    /// Hand-edited milestone list
    #[serde(rename = "Custom (Milestones)")]
    CustomMilestones,
    /// Generated milestone batches from a pacing config
    #[serde(rename = "Performance Batches")]
    PerformanceBatches,
}

/// Pacing parameters used to generate performance batches.
///
/// Only meaningful when `payment_schedule` is
/// [`PaymentSchedule::PerformanceBatches`]; recorded by the generator so the
/// batches can be re-derived or audited later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Deliverables per payout batch
    pub videos_per_batch: u32,
    /// Payout per batch
    pub amount_per_batch: f64,
    /// Optional human label ("monthly", "bi-weekly", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_label: Option<String>,
}

/// A cumulative deliverable threshold that unlocks a partial payout.
///
/// Eligibility is always evaluated against the creator's cumulative posted
/// video count, never a delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMilestone {
    /// Milestone identifier
    pub id: MilestoneId,
    /// Display label
    pub label: String,
    /// Payout amount for this milestone
    pub amount: f64,
    /// Cumulative posted-video count required to unlock
    pub video_requirement: u32,
    /// Milestone payout state
    pub status: MilestoneStatus,
}

impl PaymentMilestone {
    /// Blank milestone for manual editing
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: MilestoneId::new(),
            label: String::new(),
            amount: 0.0,
            video_requirement: 0,
            status: MilestoneStatus::Pending,
        }
    }
}

/// Contract terms for one creator engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDetails {
    /// Total contract value
    pub total_amount: f64,
    /// ISO currency code
    pub currency: String,
    /// Target deliverable count
    pub video_count: u32,
    /// Payout rail ("PayPal", "Wise", ...)
    pub payment_method: String,
    /// Agreed payout cadence
    pub payment_schedule: PaymentSchedule,
    /// Pacing parameters, recorded by batch generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pacing_config: Option<PacingConfig>,
    /// Ordered milestone list; empty for one-shot contracts.
    /// List order is authoritative for "next milestone".
    #[serde(default)]
    pub milestones: Vec<PaymentMilestone>,
    /// Contract sub-state
    pub status: ContractStatus,
    /// TikTok Shop commission percentage; only set for TikTok creators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok_shop_fee: Option<f64>,
}

impl ContractDetails {
    /// Fresh draft contract with no terms agreed yet
    #[must_use]
    pub fn draft() -> Self {
        Self {
            total_amount: 0.0,
            currency: "USD".to_string(),
            video_count: 0,
            payment_method: String::new(),
            payment_schedule: PaymentSchedule::UponCompletion,
            pacing_config: None,
            milestones: Vec::new(),
            status: ContractStatus::Draft,
            tiktok_shop_fee: None,
        }
    }

    /// Total amount already released across milestones
    #[must_use]
    pub fn paid_milestone_amount(&self) -> f64 {
        self.milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Paid)
            .map(|m| m.amount)
            .sum()
    }

    /// Look up a milestone by id
    #[must_use]
    pub fn milestone(&self, id: MilestoneId) -> Option<&PaymentMilestone> {
        self.milestones.iter().find(|m| m.id == id)
    }
}

impl Default for ContractDetails {
    fn default() -> Self {
        Self::draft()
    }
}
