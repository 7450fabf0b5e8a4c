//! Influencer lifecycle engine
//!
//! The source dashboard scattered `if field == X { status = Y }` checks
//! across its edit forms; here the rules live in one transition table.
//! Each engine operation is a field update whose status transition is a
//! side effect, validated centrally against the active
//! [`TransitionPolicy`]. All operations are idempotent at the field level:
//! reapplying the same value produces no additional effects.

use crate::effects::Effect;
use crate::error::EngineError;
use crate::ingest;
use crate::milestone::{self, MergeStrategy};
use crate::outreach;
use chrono::Utc;
use seedline_domain::{
    ChatMessage, ContractStatus, Influencer, InfluencerStatus, LogisticsStatus, PaymentSchedule,
    Platform,
};

/// Events that may move a creator through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// First outreach sent to a `Discovery` creator
    OutreachSent,
    /// Contract countersigned
    ContractSigned,
    /// Product kit shipped
    KitShipped,
    /// First deliverable posted
    FirstVideoPosted,
    /// Content approved by an operator
    ContentApproved,
    /// Payout released
    PaymentReleased,
}

impl LifecycleEvent {
    /// The pipeline stage this event nominally moves the creator to.
    #[must_use]
    pub fn target_status(&self) -> InfluencerStatus {
        match self {
            Self::OutreachSent => InfluencerStatus::Contacted,
            Self::ContractSigned => InfluencerStatus::Contracted,
            Self::KitShipped => InfluencerStatus::Shipped,
            Self::FirstVideoPosted => InfluencerStatus::ContentLive,
            Self::ContentApproved => InfluencerStatus::PaymentPending,
            Self::PaymentReleased => InfluencerStatus::Paid,
        }
    }
}

/// Whether a triggered transition may move the status backward.
///
/// The source dashboard never guarded against regressions; `ForwardOnly`
/// is the default here, `Unrestricted` reproduces the old behavior for
/// operators who need to re-run part of a pipeline. `Paid` is terminal
/// under both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// A trigger only ever advances the status
    #[default]
    ForwardOnly,
    /// A trigger may also move the status backward
    Unrestricted,
}

impl TransitionPolicy {
    /// Whether a transition from `current` to `target` is admitted.
    #[must_use]
    pub fn admits(&self, current: InfluencerStatus, target: InfluencerStatus) -> bool {
        if current.is_terminal() {
            return false;
        }
        match self {
            Self::ForwardOnly => target.rank() > current.rank(),
            Self::Unrestricted => target != current,
        }
    }
}

/// The lifecycle engine: validates proposed field updates, applies them,
/// and derives any resulting status transition.
///
/// Operations take `&mut Influencer` and return the effects the UI layer
/// should surface; an `Err` leaves the entity untouched. Persistence is the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifecycleEngine {
    policy: TransitionPolicy,
}

/// Proposed identity/profile field changes; `None` leaves a field as-is.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New platform handle
    pub handle: Option<String>,
    /// New display name
    pub name: Option<String>,
    /// New contact email
    pub email: Option<String>,
    /// New country code
    pub country: Option<String>,
    /// New category list
    pub categories: Option<Vec<String>>,
    /// New follower count
    pub follower_count: Option<u64>,
}

/// Proposed contract term changes; `None` leaves a field as-is.
#[derive(Debug, Clone, Default)]
pub struct ContractTermsUpdate {
    /// New total contract value
    pub total_amount: Option<f64>,
    /// New currency code
    pub currency: Option<String>,
    /// New deliverable target
    pub video_count: Option<u32>,
    /// New payout rail
    pub payment_method: Option<String>,
    /// New payout cadence
    pub payment_schedule: Option<PaymentSchedule>,
    /// New TikTok Shop fee percentage
    pub tiktok_shop_fee: Option<f64>,
}

impl LifecycleEngine {
    /// Engine with the given transition policy
    #[must_use]
    pub fn new(policy: TransitionPolicy) -> Self {
        Self { policy }
    }

    /// Active transition policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Apply a lifecycle event, mutating the status if the policy admits
    /// the transition. Emits `StatusChanged` (and `PaymentStatusChanged`
    /// when the derived payout field moves).
    fn apply_event(
        &self,
        influencer: &mut Influencer,
        event: LifecycleEvent,
        effects: &mut Vec<Effect>,
    ) {
        let target = event.target_status();
        if !self.policy.admits(influencer.status, target) {
            return;
        }
        let from = influencer.status;
        let pay_before = influencer.payment_status();
        influencer.status = target;
        let pay_after = influencer.payment_status();
        tracing::debug!(influencer = %influencer.id, ?event, %from, to = %target, "status transition");
        effects.push(Effect::StatusChanged { from, to: target });
        if pay_before != pay_after {
            effects.push(Effect::PaymentStatusChanged {
                from: pay_before,
                to: pay_after,
            });
        }
    }

    /// Update identity/profile fields.
    pub fn update_profile(
        &self,
        influencer: &mut Influencer,
        update: ProfileUpdate,
    ) -> Result<Vec<Effect>, EngineError> {
        if matches!(&update.handle, Some(h) if h.trim().is_empty()) {
            return Err(EngineError::validation("handle", "must not be empty"));
        }
        if matches!(&update.name, Some(n) if n.trim().is_empty()) {
            return Err(EngineError::validation("name", "must not be empty"));
        }
        if let Some(handle) = update.handle {
            influencer.handle = handle;
        }
        if let Some(name) = update.name {
            influencer.name = name;
        }
        if let Some(email) = update.email {
            influencer.email = email;
        }
        if let Some(country) = update.country {
            influencer.country = country;
        }
        if let Some(categories) = update.categories {
            influencer.categories = categories;
        }
        if let Some(count) = update.follower_count {
            influencer.follower_count = count;
        }
        influencer.touch();
        Ok(Vec::new())
    }

    /// Update contract terms. Never moves the pipeline stage.
    pub fn update_contract_terms(
        &self,
        influencer: &mut Influencer,
        update: ContractTermsUpdate,
    ) -> Result<Vec<Effect>, EngineError> {
        if matches!(update.total_amount, Some(a) if a < 0.0) {
            return Err(EngineError::validation("total amount", "must not be negative"));
        }
        if matches!(&update.currency, Some(c) if c.trim().is_empty()) {
            return Err(EngineError::validation("currency", "must not be empty"));
        }
        if let Some(fee) = update.tiktok_shop_fee {
            if influencer.platform != Platform::TikTok {
                return Err(EngineError::validation(
                    "tiktok shop fee",
                    "only applies to TikTok creators",
                ));
            }
            if fee < 0.0 {
                return Err(EngineError::validation("tiktok shop fee", "must not be negative"));
            }
        }
        let contract = &mut influencer.contract;
        if let Some(amount) = update.total_amount {
            contract.total_amount = amount;
        }
        if let Some(currency) = update.currency {
            contract.currency = currency;
        }
        if let Some(count) = update.video_count {
            contract.video_count = count;
        }
        if let Some(method) = update.payment_method {
            contract.payment_method = method;
        }
        if let Some(schedule) = update.payment_schedule {
            contract.payment_schedule = schedule;
        }
        if let Some(fee) = update.tiktok_shop_fee {
            contract.tiktok_shop_fee = Some(fee);
        }
        influencer.touch();
        Ok(Vec::new())
    }

    /// Set the contract sub-state. Signing transitions the creator to
    /// `Contracted`; reapplying the same sub-state is a no-op.
    pub fn set_contract_status(
        &self,
        influencer: &mut Influencer,
        status: ContractStatus,
    ) -> Result<Vec<Effect>, EngineError> {
        if influencer.contract.status == status {
            return Ok(Vec::new());
        }
        influencer.contract.status = status;
        let mut effects = Vec::new();
        if status == ContractStatus::Signed {
            self.apply_event(influencer, LifecycleEvent::ContractSigned, &mut effects);
        }
        influencer.touch();
        Ok(effects)
    }

    /// Set the kit shipping state. Shipping transitions the creator to
    /// `Shipped`.
    pub fn set_logistics_status(
        &self,
        influencer: &mut Influencer,
        status: LogisticsStatus,
    ) -> Result<Vec<Effect>, EngineError> {
        if influencer.logistics.status == status {
            return Ok(Vec::new());
        }
        influencer.logistics.status = status;
        let mut effects = Vec::new();
        if status == LogisticsStatus::Shipped {
            self.apply_event(influencer, LifecycleEvent::KitShipped, &mut effects);
        }
        influencer.touch();
        Ok(effects)
    }

    /// Record a shipment with carrier and tracking details, moving
    /// logistics to `Shipped`.
    pub fn record_shipment(
        &self,
        influencer: &mut Influencer,
        carrier: impl Into<String>,
        tracking_number: impl Into<String>,
    ) -> Result<Vec<Effect>, EngineError> {
        let carrier = carrier.into();
        if carrier.trim().is_empty() {
            return Err(EngineError::validation("carrier", "must not be empty"));
        }
        let effects = self.set_logistics_status(influencer, LogisticsStatus::Shipped)?;
        influencer.logistics.carrier = Some(carrier);
        influencer.logistics.tracking_number = Some(tracking_number.into());
        Ok(effects)
    }

    /// Toggle operator sign-off on the content. Approval transitions the
    /// creator to `PaymentPending`; toggling it back off never reverses a
    /// transition.
    pub fn set_content_approved(
        &self,
        influencer: &mut Influencer,
        approved: bool,
    ) -> Result<Vec<Effect>, EngineError> {
        if influencer.content.is_approved == approved {
            return Ok(Vec::new());
        }
        influencer.content.is_approved = approved;
        let mut effects = Vec::new();
        if approved {
            self.apply_event(influencer, LifecycleEvent::ContentApproved, &mut effects);
        }
        influencer.touch();
        Ok(effects)
    }

    /// Release the payout. Requires approved content; transitions the
    /// creator to `Paid` (terminal).
    pub fn release_payment(
        &self,
        influencer: &mut Influencer,
    ) -> Result<Vec<Effect>, EngineError> {
        if !influencer.content.is_approved {
            return Err(EngineError::Precondition(
                "content must be approved before payment".into(),
            ));
        }
        let mut effects = Vec::new();
        self.apply_event(influencer, LifecycleEvent::PaymentReleased, &mut effects);
        if !effects.is_empty() {
            tracing::info!(influencer = %influencer.id, "payment released");
            influencer.touch();
        }
        Ok(effects)
    }

    /// Send a templated outreach message: renders `[Name]`, appends a macro
    /// entry to the history, and moves a `Discovery` creator to `Contacted`.
    /// Delivery is the caller's concern.
    pub fn record_outreach(
        &self,
        influencer: &mut Influencer,
        sender: impl Into<String>,
        template: &str,
    ) -> Result<Vec<Effect>, EngineError> {
        let sender = sender.into();
        if sender.trim().is_empty() {
            return Err(EngineError::validation("sender", "must not be empty"));
        }
        if template.trim().is_empty() {
            return Err(EngineError::validation("message", "must not be empty"));
        }
        let body = outreach::render_template(template, &influencer.name);
        influencer.history.push(ChatMessage::outreach(sender, body));
        let mut effects = vec![Effect::MessageLogged { internal: false }];
        if influencer.status == InfluencerStatus::Discovery {
            self.apply_event(influencer, LifecycleEvent::OutreachSent, &mut effects);
        }
        influencer.touch();
        Ok(effects)
    }

    /// Append an internal note. Never triggers a status change.
    pub fn add_internal_note(
        &self,
        influencer: &mut Influencer,
        sender: impl Into<String>,
        note: &str,
    ) -> Result<Vec<Effect>, EngineError> {
        if note.trim().is_empty() {
            return Err(EngineError::validation("note", "must not be empty"));
        }
        influencer
            .history
            .push(ChatMessage::internal_note(sender, note));
        influencer.touch();
        Ok(vec![Effect::MessageLogged { internal: true }])
    }

    /// Add a manually entered deliverable link. The first video flips the
    /// content stage to `Live` and moves the creator to `ContentLive` on
    /// the same event.
    pub fn add_manual_video(
        &self,
        influencer: &mut Influencer,
        raw_link: &str,
    ) -> Result<Vec<Effect>, EngineError> {
        let first = ingest::add_manual_video(&mut influencer.content, raw_link, Utc::now())?;
        let mut effects = Vec::new();
        if first {
            effects.push(Effect::ContentWentLive);
            self.apply_event(influencer, LifecycleEvent::FirstVideoPosted, &mut effects);
        }
        influencer.touch();
        Ok(effects)
    }

    /// Regenerate performance batches from pacing inputs against the
    /// contract's deliverable target. Non-positive inputs are a silent
    /// no-op (no effects).
    pub fn regenerate_batches(
        &self,
        influencer: &mut Influencer,
        videos_per_batch: u32,
        amount_per_batch: f64,
        strategy: MergeStrategy,
    ) -> Result<Vec<Effect>, EngineError> {
        let target = influencer.contract.video_count;
        let count = milestone::generate_batch_milestones(
            &mut influencer.contract,
            target,
            videos_per_batch,
            amount_per_batch,
            strategy,
        );
        if count == 0 {
            return Ok(Vec::new());
        }
        influencer.touch();
        Ok(vec![Effect::MilestonesGenerated { count }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::status_change;
    use pretty_assertions::assert_eq;
    use seedline_domain::{ContentStage, MilestoneStatus, PaymentStatus};

    fn creator() -> Influencer {
        Influencer::new("@mia.makes", "Mia", Platform::TikTok)
    }

    fn engine() -> LifecycleEngine {
        LifecycleEngine::default()
    }

    #[test]
    fn outreach_moves_discovery_to_contacted() {
        let mut inf = creator();
        let effects = engine()
            .record_outreach(&mut inf, "ops@agency", "Hi [Name]!")
            .unwrap();
        assert_eq!(inf.status, InfluencerStatus::Contacted);
        assert_eq!(
            status_change(&effects),
            Some((InfluencerStatus::Discovery, InfluencerStatus::Contacted))
        );
        assert_eq!(inf.history.len(), 1);
        assert_eq!(inf.history[0].body, "Hi Mia!");
        assert!(!inf.history[0].is_internal);
    }

    #[test]
    fn outreach_past_discovery_only_logs() {
        let mut inf = creator();
        inf.status = InfluencerStatus::Negotiating;
        let effects = engine()
            .record_outreach(&mut inf, "ops@agency", "Following up, [Name]")
            .unwrap();
        assert_eq!(inf.status, InfluencerStatus::Negotiating);
        assert_eq!(status_change(&effects), None);
        assert_eq!(inf.history.len(), 1);
    }

    #[test]
    fn internal_note_never_transitions() {
        let mut inf = creator();
        let effects = engine()
            .add_internal_note(&mut inf, "ops@agency", "try again next week")
            .unwrap();
        assert_eq!(inf.status, InfluencerStatus::Discovery);
        assert_eq!(effects, vec![Effect::MessageLogged { internal: true }]);
        assert!(inf.history[0].is_internal);
    }

    #[test]
    fn signing_contract_moves_to_contracted() {
        let mut inf = creator();
        inf.status = InfluencerStatus::Negotiating;
        let effects = engine()
            .set_contract_status(&mut inf, ContractStatus::Signed)
            .unwrap();
        assert_eq!(inf.status, InfluencerStatus::Contracted);
        assert_eq!(
            status_change(&effects),
            Some((InfluencerStatus::Negotiating, InfluencerStatus::Contracted))
        );
    }

    #[test]
    fn signing_twice_is_idempotent() {
        let mut inf = creator();
        engine()
            .set_contract_status(&mut inf, ContractStatus::Signed)
            .unwrap();
        let snapshot = inf.clone();
        let effects = engine()
            .set_contract_status(&mut inf, ContractStatus::Signed)
            .unwrap();
        assert!(effects.is_empty());
        assert_eq!(inf.status, snapshot.status);
        assert_eq!(inf.contract, snapshot.contract);
        assert_eq!(inf.history, snapshot.history);
    }

    #[test]
    fn forward_only_never_regresses_a_later_stage() {
        // Contract signing while content is already live must not pull the
        // creator back to Contracted.
        let mut inf = creator();
        inf.status = InfluencerStatus::ContentLive;
        let effects = engine()
            .set_contract_status(&mut inf, ContractStatus::Signed)
            .unwrap();
        assert_eq!(inf.status, InfluencerStatus::ContentLive);
        assert_eq!(status_change(&effects), None);
        // The sub-record update itself still applied.
        assert_eq!(inf.contract.status, ContractStatus::Signed);
    }

    #[test]
    fn unrestricted_policy_allows_regressions_except_from_paid() {
        let engine = LifecycleEngine::new(TransitionPolicy::Unrestricted);
        let mut inf = creator();
        inf.status = InfluencerStatus::ContentLive;
        engine
            .set_contract_status(&mut inf, ContractStatus::Signed)
            .unwrap();
        assert_eq!(inf.status, InfluencerStatus::Contracted);

        inf.status = InfluencerStatus::Paid;
        let effects = engine
            .set_logistics_status(&mut inf, LogisticsStatus::Shipped)
            .unwrap();
        assert_eq!(inf.status, InfluencerStatus::Paid);
        assert_eq!(status_change(&effects), None);
    }

    #[test]
    fn shipping_moves_to_shipped() {
        let mut inf = creator();
        inf.status = InfluencerStatus::Contracted;
        let effects = engine()
            .record_shipment(&mut inf, "UPS", "1Z999")
            .unwrap();
        assert_eq!(inf.status, InfluencerStatus::Shipped);
        assert_eq!(inf.logistics.status, LogisticsStatus::Shipped);
        assert_eq!(inf.logistics.carrier.as_deref(), Some("UPS"));
        assert_eq!(inf.logistics.tracking_number.as_deref(), Some("1Z999"));
        assert!(status_change(&effects).is_some());
    }

    #[test]
    fn empty_carrier_is_rejected_without_mutation() {
        let mut inf = creator();
        inf.status = InfluencerStatus::Contracted;
        let err = engine().record_shipment(&mut inf, "  ", "1Z999").unwrap_err();
        assert!(matches!(err, EngineError::Validation { .. }));
        assert_eq!(inf.logistics.status, LogisticsStatus::Pending);
        assert_eq!(inf.status, InfluencerStatus::Contracted);
    }

    #[test]
    fn first_video_moves_to_content_live() {
        let mut inf = creator();
        inf.status = InfluencerStatus::Shipped;
        let effects = engine()
            .add_manual_video(&mut inf, "https://www.tiktok.com/@mia/video/7301")
            .unwrap();
        assert_eq!(inf.status, InfluencerStatus::ContentLive);
        assert_eq!(inf.content.status, ContentStage::Live);
        assert!(effects.contains(&Effect::ContentWentLive));
    }

    #[test]
    fn later_videos_do_not_re_fire_content_live() {
        let mut inf = creator();
        inf.status = InfluencerStatus::Shipped;
        engine()
            .add_manual_video(&mut inf, "https://www.tiktok.com/@mia/video/7301")
            .unwrap();
        let effects = engine()
            .add_manual_video(&mut inf, "https://www.tiktok.com/@mia/video/7302")
            .unwrap();
        assert!(effects.is_empty());
        assert_eq!(inf.posted_count(), 2);
    }

    #[test]
    fn approval_moves_to_payment_pending_from_any_earlier_stage() {
        for status in [
            InfluencerStatus::Discovery,
            InfluencerStatus::Negotiating,
            InfluencerStatus::ContentLive,
        ] {
            let mut inf = creator();
            inf.status = status;
            engine().set_content_approved(&mut inf, true).unwrap();
            assert_eq!(inf.status, InfluencerStatus::PaymentPending, "from {status}");
        }
    }

    #[test]
    fn approval_does_not_regress_paid() {
        let mut inf = creator();
        inf.status = InfluencerStatus::Paid;
        let effects = engine().set_content_approved(&mut inf, true).unwrap();
        assert_eq!(inf.status, InfluencerStatus::Paid);
        assert_eq!(status_change(&effects), None);
    }

    #[test]
    fn revoking_approval_does_not_reverse_the_transition() {
        let mut inf = creator();
        inf.status = InfluencerStatus::ContentLive;
        engine().set_content_approved(&mut inf, true).unwrap();
        let effects = engine().set_content_approved(&mut inf, false).unwrap();
        assert_eq!(inf.status, InfluencerStatus::PaymentPending);
        assert_eq!(status_change(&effects), None);
        assert!(!inf.content.is_approved);
    }

    #[test]
    fn payment_release_requires_approved_content() {
        let mut inf = creator();
        inf.status = InfluencerStatus::PaymentPending;
        let err = engine().release_payment(&mut inf).unwrap_err();
        assert!(matches!(err, EngineError::Precondition(_)));
        assert_eq!(inf.status, InfluencerStatus::PaymentPending);
    }

    #[test]
    fn payment_release_moves_to_paid_and_flips_payment_status() {
        let mut inf = creator();
        inf.status = InfluencerStatus::ContentLive;
        engine().set_content_approved(&mut inf, true).unwrap();
        assert_eq!(inf.payment_status(), PaymentStatus::Processing);

        let effects = engine().release_payment(&mut inf).unwrap();
        assert_eq!(inf.status, InfluencerStatus::Paid);
        assert_eq!(inf.payment_status(), PaymentStatus::Paid);
        assert!(effects.contains(&Effect::PaymentStatusChanged {
            from: PaymentStatus::Processing,
            to: PaymentStatus::Paid,
        }));
    }

    #[test]
    fn releasing_twice_is_idempotent() {
        let mut inf = creator();
        inf.status = InfluencerStatus::PaymentPending;
        inf.content.is_approved = true;
        engine().release_payment(&mut inf).unwrap();
        let effects = engine().release_payment(&mut inf).unwrap();
        assert!(effects.is_empty());
        assert_eq!(inf.status, InfluencerStatus::Paid);
    }

    #[test]
    fn profile_update_rejects_empty_handle() {
        let mut inf = creator();
        let err = engine()
            .update_profile(
                &mut inf,
                ProfileUpdate {
                    handle: Some("  ".into()),
                    ..ProfileUpdate::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation { field: "handle", .. }));
        assert_eq!(inf.handle, "@mia.makes");
    }

    #[test]
    fn contract_terms_reject_negative_amount() {
        let mut inf = creator();
        let err = engine()
            .update_contract_terms(
                &mut inf,
                ContractTermsUpdate {
                    total_amount: Some(-10.0),
                    ..ContractTermsUpdate::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation { .. }));
    }

    #[test]
    fn tiktok_fee_rejected_for_other_platforms() {
        let mut inf = Influencer::new("@a", "A", Platform::Instagram);
        let err = engine()
            .update_contract_terms(
                &mut inf,
                ContractTermsUpdate {
                    tiktok_shop_fee: Some(5.0),
                    ..ContractTermsUpdate::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation { .. }));
        assert!(inf.contract.tiktok_shop_fee.is_none());
    }

    #[test]
    fn regenerate_batches_emits_effect_and_updates_contract() {
        let mut inf = creator();
        inf.contract.video_count = 100;
        let effects = engine()
            .regenerate_batches(&mut inf, 12, 1_200.0, MergeStrategy::Replace)
            .unwrap();
        assert_eq!(effects, vec![Effect::MilestonesGenerated { count: 9 }]);
        assert_eq!(inf.contract.milestones.len(), 9);
        assert_eq!(inf.contract.milestones[8].video_requirement, 100);
        assert!(inf
            .contract
            .milestones
            .iter()
            .all(|m| m.status == MilestoneStatus::Pending));
    }

    #[test]
    fn regenerate_with_zero_pacing_is_a_no_op() {
        let mut inf = creator();
        inf.contract.video_count = 100;
        let effects = engine()
            .regenerate_batches(&mut inf, 0, 1_200.0, MergeStrategy::Replace)
            .unwrap();
        assert!(effects.is_empty());
        assert!(inf.contract.milestones.is_empty());
    }
}
