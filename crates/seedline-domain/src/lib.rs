//! Seedline domain model
//!
//! Entity types for the influencer-seeding campaign core:
//! - [`Influencer`] and its embedded sub-records
//! - Contract terms and payment milestones
//! - Deliverable content, logistics, and the message history
//!
//! All types are `serde` round-trippable; the storage representation of an
//! entity deserializes back to a deep-equal value.

#![warn(unreachable_pub)]

pub mod content;
pub mod contract;
pub mod ids;
pub mod influencer;
pub mod message;
pub mod status;

pub use content::{ContentStatus, Logistics, PostedVideo};
pub use contract::{ContractDetails, PacingConfig, PaymentMilestone, PaymentSchedule};
pub use ids::{InfluencerId, MessageId, MilestoneId};
pub use influencer::{Influencer, Platform};
pub use message::{ChatMessage, MessageKind};
pub use status::{
    ContentStage, ContractStatus, InfluencerStatus, LogisticsStatus, MilestoneStatus,
    PaymentStatus,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
