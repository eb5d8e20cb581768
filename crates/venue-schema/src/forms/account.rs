use serde::Serialize;
use thiserror::Error;
use typed_builder::TypedBuilder;
use venue_utils::types::ProtectedString;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountFormError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("{0:?} is not an email address")]
    InvalidEmail(String),
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters long")]
    ShortPassword,
}

#[derive(Debug, Clone, Serialize, TypedBuilder)]
pub struct LoginForm<'a> {
    pub email: &'a str,
    pub password: &'a ProtectedString,
}

impl LoginForm<'_> {
    pub fn validate(&self) -> Result<(), AccountFormError> {
        check_email(self.email)?;
        if self.password.is_empty() {
            return Err(AccountFormError::EmptyPassword);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, TypedBuilder)]
pub struct RegisterForm<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    pub password: &'a ProtectedString,
}

impl RegisterForm<'_> {
    pub fn validate(&self) -> Result<(), AccountFormError> {
        if self.name.trim().is_empty() {
            return Err(AccountFormError::EmptyName);
        }
        check_email(self.email)?;
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(AccountFormError::ShortPassword);
        }
        Ok(())
    }
}

// Only the shape is checked: one `@`, something before it and a dotted domain.
fn check_email(email: &str) -> Result<(), AccountFormError> {
    let invalid = || AccountFormError::InvalidEmail(email.to_string());
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let valid = !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'));

    if valid {
        Ok(())
    } else {
        Err(invalid())
    }
}
