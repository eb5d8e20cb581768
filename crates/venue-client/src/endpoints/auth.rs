use tracing::debug;
use venue_schema::forms::{LoginForm, RegisterForm};
use venue_schema::types::{Admin, AuthResponse, User};
use venue_utils::error::exts::{IntoTypedError, ResultExt};
use venue_utils::{ErrorCategory, Result};

use crate::errors::{LoginError, RegisterError};
use crate::routes::Route;
use crate::{Client, Session};

impl Client {
    #[tracing::instrument(skip_all)]
    pub async fn register_user(&self, form: &RegisterForm<'_>) -> Result<Session, RegisterError> {
        form.validate()
            .into_typed_error()
            .category(ErrorCategory::User)
            .change_context(RegisterError)?;

        let route = Route::RegisterUser;
        let request = self.request(&route, None).change_context(RegisterError)?;
        let response: AuthResponse<User> = self
            .send(&route, request.json(form))
            .await
            .change_context(RegisterError)?;

        debug!(user.id = %response.profile.id, "registered user");
        Ok(Session::user(response))
    }

    #[tracing::instrument(skip_all)]
    pub async fn login_user(&self, form: &LoginForm<'_>) -> Result<Session, LoginError> {
        let route = Route::LoginUser;
        let response: AuthResponse<User> = self.login(&route, form).await?;
        debug!(user.id = %response.profile.id, "logged in as user");
        Ok(Session::user(response))
    }

    #[tracing::instrument(skip_all)]
    pub async fn login_admin(&self, form: &LoginForm<'_>) -> Result<Session, LoginError> {
        let route = Route::LoginAdmin;
        let response: AuthResponse<Admin> = self.login(&route, form).await?;
        debug!(admin.id = %response.profile.id, "logged in as admin");
        Ok(Session::admin(response))
    }

    async fn login<P: serde::de::DeserializeOwned>(
        &self,
        route: &Route<'_>,
        form: &LoginForm<'_>,
    ) -> Result<AuthResponse<P>, LoginError> {
        form.validate()
            .into_typed_error()
            .category(ErrorCategory::User)
            .change_context(LoginError)?;

        let request = self.request(route, None).change_context(LoginError)?;
        self.send(route, request.json(form))
            .await
            .change_context(LoginError)
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use crate::test_utils::MockBackend;
    use venue_schema::forms::LoginForm;
    use venue_schema::types::Role;
    use venue_utils::types::ProtectedString;

    #[tokio::test]
    async fn admin_login_opens_admin_session() {
        let backend = MockBackend::start(vec![(
            "POST /admin/login",
            200,
            r#"{"token":"admin-token","admin":{"_id":"a1","name":"Root","email":"root@example.com"}}"#
                .into(),
        )])
        .await;

        let password = ProtectedString::new("correct horse");
        let form = LoginForm::builder()
            .email("root@example.com")
            .password(&password)
            .build();

        let session = backend.client().login_admin(&form).await.unwrap();
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(session.token().as_str(), "admin-token");

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].json()["email"], "root@example.com");
        assert!(requests[0].authorization.is_none());
    }

    #[tokio::test]
    async fn invalid_login_never_reaches_backend() {
        let backend = MockBackend::start(Vec::new()).await;
        let password = ProtectedString::new("x");
        let form = LoginForm::builder()
            .email("not-an-email")
            .password(&password)
            .build();

        let error = backend.client().login_user(&form).await.unwrap_err();
        assert!(error.get_category().is_user_error());
        assert!(backend.requests().is_empty());
    }
}
