use venue_schema::types::{Admin, AuthResponse, Role, User};
use venue_utils::types::Sensitive;

/// Account a session was opened for, when the backend told us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    User(User),
    Admin(Admin),
}

/// Credentials of a logged in account, passed along with every
/// authenticated request.
#[derive(Debug, Clone)]
pub struct Session {
    role: Role,
    token: Sensitive<String>,
    profile: Option<Profile>,
}

impl Session {
    /// Session out of a token obtained elsewhere, such as one saved
    /// from an earlier login.
    #[must_use]
    pub fn new(role: Role, token: impl Into<String>) -> Self {
        Self {
            role,
            token: Sensitive::new(token.into()),
            profile: None,
        }
    }

    #[must_use]
    pub fn user(response: AuthResponse<User>) -> Self {
        Self {
            role: Role::User,
            token: response.token,
            profile: Some(Profile::User(response.profile)),
        }
    }

    #[must_use]
    pub fn admin(response: AuthResponse<Admin>) -> Self {
        Self {
            role: Role::Admin,
            token: response.token,
            profile: Some(Profile::Admin(response.profile)),
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn token(&self) -> &Sensitive<String> {
        &self.token
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
