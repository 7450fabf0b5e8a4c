//! Seedline engine - the influencer lifecycle state machine and the
//! payment milestone engine
//!
//! Two tightly coupled cores:
//! - the lifecycle engine owns a creator's `status` and the transition
//!   rules fired as side effects of sub-record updates (contract signing,
//!   kit shipment, first posted video, content approval, payout release,
//!   outreach);
//! - the milestone engine derives payment eligibility from contract state
//!   and the cumulative posted-video count, and generates cumulative
//!   payment batches from a pacing configuration.
//!
//! All operations are synchronous, pure-function-style state
//! transformations: the caller hands in an entity, gets back effects to
//! surface, and persists the result itself.
//!
//! # Example
//!
//! ```rust
//! use seedline_domain::{ContractStatus, Influencer, InfluencerStatus, Platform};
//! use seedline_engine::LifecycleEngine;
//!
//! let engine = LifecycleEngine::default();
//! let mut creator = Influencer::new("@mia.makes", "Mia", Platform::TikTok);
//!
//! engine.record_outreach(&mut creator, "ops@agency", "Hi [Name]!").unwrap();
//! assert_eq!(creator.status, InfluencerStatus::Contacted);
//!
//! engine.set_contract_status(&mut creator, ContractStatus::Signed).unwrap();
//! assert_eq!(creator.status, InfluencerStatus::Contracted);
//! ```

#![warn(unreachable_pub)]

pub mod effects;
pub mod error;
pub mod ingest;
pub mod lifecycle;
pub mod milestone;
pub mod outreach;

pub use effects::{status_change, Effect};
pub use error::EngineError;
pub use ingest::{add_manual_video, extract_video_id};
pub use lifecycle::{
    ContractTermsUpdate, LifecycleEngine, LifecycleEvent, ProfileUpdate, TransitionPolicy,
};
pub use milestone::{
    add_milestone, compute_eligibility, generate_batch_milestones, remove_milestone,
    set_milestone_status, Eligibility, MergeStrategy,
};
pub use outreach::render_template;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the Seedline engine
    pub use crate::{
        compute_eligibility, Effect, Eligibility, EngineError, LifecycleEngine, MergeStrategy,
        TransitionPolicy,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
