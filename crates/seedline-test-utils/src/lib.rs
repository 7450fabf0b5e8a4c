//! Testing utilities for the Seedline workspace
//!
//! Shared fixtures and a tracing init guard for tests.

#![allow(missing_docs)]

use once_cell::sync::Lazy;
use seedline_domain::{
    ContractStatus, Influencer, InfluencerStatus, PaymentSchedule, Platform,
};
use seedline_engine::{generate_batch_milestones, LifecycleEngine, MergeStrategy};

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Install the test tracing subscriber once per process.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// A fresh TikTok creator in `Discovery`.
pub fn creator_fixture() -> Influencer {
    Influencer::new("@mia.makes", "Mia", Platform::TikTok)
        .with_email("mia@example.com")
        .with_country("US")
        .with_categories(vec!["beauty".to_string()])
        .with_followers(120_000)
}

/// A creator with a signed performance-batch contract: 24 videos,
/// two $1,200 batches of 12.
pub fn contracted_creator_fixture() -> Influencer {
    let mut creator = creator_fixture();
    creator.contract.total_amount = 2_400.0;
    creator.contract.video_count = 24;
    creator.contract.payment_method = "PayPal".to_string();
    creator.contract.payment_schedule = PaymentSchedule::PerformanceBatches;
    generate_batch_milestones(&mut creator.contract, 24, 12, 1_200.0, MergeStrategy::Replace);
    creator.contract.status = ContractStatus::Signed;
    creator.status = InfluencerStatus::Contracted;
    creator
}

/// A creator driven through the pipeline to `ContentLive` with `posted`
/// videos already ingested.
pub fn live_creator_fixture(posted: u32) -> Influencer {
    let engine = LifecycleEngine::default();
    let mut creator = contracted_creator_fixture();
    engine
        .record_shipment(&mut creator, "UPS", "1Z999")
        .expect("fixture shipment");
    for n in 0..posted {
        engine
            .add_manual_video(
                &mut creator,
                &format!("https://www.tiktok.com/@mia.makes/video/9{n:04}"),
            )
            .expect("fixture video");
    }
    creator
}
