use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use venue_utils::serial::AsCalendarDate;

use crate::{PlanId, SubscriptionId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubscriptionPlan {
    #[serde(alias = "_id")]
    pub id: PlanId,
    pub name: String,
    pub price_monthly: Decimal,
    pub duration_days: u32,
    #[serde(default)]
    pub perks: Vec<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubscriptionStatus {
    #[serde(alias = "Active")]
    Active,
    #[serde(alias = "Expired")]
    Expired,
    #[serde(alias = "Cancelled", alias = "canceled")]
    Cancelled,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subscription {
    #[serde(alias = "_id")]
    pub id: SubscriptionId,
    pub user_id: UserId,
    pub plan_id: PlanId,
    #[serde_as(as = "AsCalendarDate")]
    pub starts_on: NaiveDate,
    #[serde_as(as = "AsCalendarDate")]
    pub ends_on: NaiveDate,
    pub status: SubscriptionStatus,
}

impl Subscription {
    /// The backend only flips the status lazily, so the end date
    /// is checked as well.
    #[must_use]
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.status == SubscriptionStatus::Active && today <= self.ends_on
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn subscription() -> Subscription {
        serde_json::from_str(
            r#"{
                "_id": "sub-1",
                "user_id": "user-1",
                "plan_id": "plan-gold",
                "starts_on": "2025-01-01T00:00:00.000Z",
                "ends_on": "2025-01-31",
                "status": "Active"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn decodes_timestamps_as_dates() {
        let subscription = subscription();
        assert_eq!(
            subscription.starts_on,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(subscription.status, SubscriptionStatus::Active);
    }

    #[test]
    fn active_until_end_date() {
        let subscription = subscription();
        assert!(subscription.is_active_on(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
        assert!(!subscription.is_active_on(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
    }

    #[test]
    fn plan_perks_are_optional() {
        let plan: SubscriptionPlan = serde_json::from_str(
            r#"{"id":"plan-basic","name":"Basic","price_monthly":499,"duration_days":30}"#,
        )
        .unwrap();
        assert!(plan.perks.is_empty());
        assert_eq!(plan.price_monthly, Decimal::from(499));
    }
}
