use std::fmt::Display;
use thiserror::Error;
use venue_schema::types::{BookingStatus, Role};
use venue_schema::BookingId;

#[derive(Debug, Error)]
#[error("could not set up HTTP client")]
pub struct BuildClientError;

#[derive(Debug, Error)]
#[error("failed to perform HTTP request to the venue backend")]
pub struct RequestHttpError;

#[derive(Debug, Error)]
#[error("this action requires you to be logged in")]
pub struct MissingSessionError;

#[derive(Debug, Error)]
#[error("this action requires the {expected} role but the session is for the {actual} role")]
pub struct WrongRoleError {
    pub expected: Role,
    pub actual: Role,
}

#[derive(Debug, Error)]
#[error("booking {0} does not exist")]
pub struct BookingNotFound(pub BookingId);

#[derive(Debug, Error)]
#[error("could not log in")]
pub struct LoginError;

#[derive(Debug, Error)]
#[error("could not register account")]
pub struct RegisterError;

#[derive(Debug, Error)]
#[error("could not update hall listing")]
pub struct ManageHallError;

#[derive(Debug, Error)]
#[error("could not book hall")]
pub struct BookHallError;

#[derive(Debug, Error)]
#[error("could not cancel booking")]
pub struct CancelBookingError;

#[derive(Debug, Error)]
#[error("booking is {0} and can no longer be cancelled")]
pub struct BookingClosed(pub BookingStatus);

#[derive(Debug, Error)]
#[error("could not update booking status")]
pub struct DecideBookingError;

#[derive(Debug, Error)]
#[error("could not issue invoice")]
pub struct IssueInvoiceError;

#[derive(Debug, Error)]
#[error("could not subscribe to plan")]
pub struct SubscribeError;

/// Error message sent back by the backend along with a failed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendMessage(pub String);

impl BackendMessage {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BackendMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "backend says: {}", self.0)
    }
}
