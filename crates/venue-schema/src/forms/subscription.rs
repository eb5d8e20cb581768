use serde::Serialize;
use thiserror::Error;

use crate::types::SubscriptionPlan;
use crate::PlanId;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("there is no subscription plan {0}")]
pub struct SubscribeFormError(pub PlanId);

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubscribeForm<'a> {
    pub plan_id: &'a PlanId,
}

impl<'a> SubscribeForm<'a> {
    #[must_use]
    pub const fn new(plan_id: &'a PlanId) -> Self {
        Self { plan_id }
    }

    /// Looks up the chosen plan among the ones on offer.
    pub fn validate<'p>(
        &self,
        plans: &'p [SubscriptionPlan],
    ) -> Result<&'p SubscriptionPlan, SubscribeFormError> {
        plans
            .iter()
            .find(|plan| plan.id == *self.plan_id)
            .ok_or_else(|| SubscribeFormError(self.plan_id.clone()))
    }
}
