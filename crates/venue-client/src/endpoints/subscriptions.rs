use tracing::info;
use venue_schema::forms::SubscribeForm;
use venue_schema::types::{Subscription, SubscriptionPlan};
use venue_schema::PlanId;
use venue_utils::error::exts::{IntoTypedError, ResultExt};
use venue_utils::http::HttpErrorExt;
use venue_utils::{ErrorCategory, Result};

use crate::errors::{RequestHttpError, SubscribeError};
use crate::routes::Route;
use crate::{Client, Session};

impl Client {
    #[tracing::instrument(skip_all)]
    pub async fn plans(&self) -> Result<Vec<SubscriptionPlan>, RequestHttpError> {
        let route = Route::SubscriptionPlans;
        let request = self.request(&route, None)?;
        self.send(&route, request).await
    }

    #[tracing::instrument(skip_all, fields(plan.id = %plan_id))]
    pub async fn subscribe(
        &self,
        session: &Session,
        plan_id: &PlanId,
    ) -> Result<Subscription, SubscribeError> {
        let route = Route::Subscribe;
        let request = self
            .request(&route, Some(session))
            .change_context(SubscribeError)?;

        let plans = self.plans().await.change_context(SubscribeError)?;
        let form = SubscribeForm::new(plan_id);
        let plan = form
            .validate(&plans)
            .into_typed_error()
            .category(ErrorCategory::User)
            .change_context(SubscribeError)?;

        let subscription: Subscription = self
            .send(&route, request.json(&form))
            .await
            .change_context(SubscribeError)?;

        info!(plan = %plan.name, ends_on = %subscription.ends_on, "subscribed to plan");
        Ok(subscription)
    }

    /// The session's active subscription, if there's any.
    #[tracing::instrument(skip_all)]
    pub async fn current_subscription(
        &self,
        session: &Session,
    ) -> Result<Option<Subscription>, RequestHttpError> {
        let route = Route::CurrentSubscription;
        let request = self.request(&route, Some(session))?;
        let result = self.send(&route, request).await;
        if result
            .http_error_info()
            .is_some_and(|info| info.is_not_found())
        {
            return Ok(None);
        }
        result
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use crate::test_utils::MockBackend;
    use crate::Session;
    use venue_schema::forms::SubscribeFormError;
    use venue_schema::types::Role;
    use venue_schema::PlanId;

    const PLANS: &str = r#"{"plans":[{"_id":"plan-gold","name":"Gold","price_monthly":999,"duration_days":30}]}"#;

    #[tokio::test]
    async fn subscribes_to_offered_plan() {
        let backend = MockBackend::start(vec![
            ("GET /subscription/plans", 200, PLANS.into()),
            (
                "POST /subscription/user/subscribe",
                201,
                r#"{"subscription":{"_id":"sub-1","user_id":"user-1","plan_id":"plan-gold",
                    "starts_on":"2025-03-01","ends_on":"2025-03-31","status":"active"}}"#
                    .into(),
            ),
        ])
        .await;

        let session = Session::new(Role::User, "user-token");
        let subscription = backend
            .client()
            .subscribe(&session, &PlanId::new("plan-gold"))
            .await
            .unwrap();
        assert_eq!(subscription.plan_id.as_str(), "plan-gold");
        assert_eq!(backend.requests()[1].json()["plan_id"], "plan-gold");
    }

    #[tokio::test]
    async fn unknown_plan_is_refused_locally() {
        let backend = MockBackend::start(vec![("GET /subscription/plans", 200, PLANS.into())]).await;
        let session = Session::new(Role::User, "user-token");
        let error = backend
            .client()
            .subscribe(&session, &PlanId::new("plan-platinum"))
            .await
            .unwrap_err();
        assert!(error.contains::<SubscribeFormError>());
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn no_subscription_is_none() {
        let backend = MockBackend::start(Vec::new()).await;
        let session = Session::new(Role::User, "user-token");
        let current = backend.client().current_subscription(&session).await.unwrap();
        assert!(current.is_none());

        let backend = MockBackend::start(vec![(
            "GET /subscription/user/current",
            200,
            r#"{"subscription":null}"#.into(),
        )])
        .await;
        let current = backend.client().current_subscription(&session).await.unwrap();
        assert!(current.is_none());
    }
}
