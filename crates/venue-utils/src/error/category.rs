use strum_macros::Display;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Display)]
#[must_use]
#[non_exhaustive]
pub enum ErrorCategory {
    /// The caller supplied something the client refuses to send.
    #[strum(to_string = "User error")]
    User,
    /// The backend rejected or failed the request.
    #[strum(to_string = "Backend error")]
    Backend,
    #[default]
    #[strum(to_string = "Error occurred")]
    Unknown,
}

impl ErrorCategory {
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::User)
    }
}
