// Mirrors error_stack's ResultExt, except that every error carries
// an ErrorCategory and a span trace along with its report.
use core::result::Result as StdResult;
use error_stack::Context;
use std::fmt;

use super::{Error, ErrorCategory, Result};

pub use super::into_error::IntoError;

/// Implements shared functions for [`Result`](std::result::Result) where
/// its error type is a typed [`Error`].
pub trait ResultExt {
    type Ok;
    type Context: Context;

    fn anonymize_error(self) -> Result<Self::Ok>;

    fn attach<A>(self, attachment: A) -> Result<Self::Ok, Self::Context>
    where
        A: Send + Sync + 'static;

    fn attach_lazy<A, F>(self, attachment: F) -> Result<Self::Ok, Self::Context>
    where
        A: Send + Sync + 'static,
        F: FnOnce() -> A;

    fn attach_printable<A>(self, attachment: A) -> Result<Self::Ok, Self::Context>
    where
        A: fmt::Display + fmt::Debug + Send + Sync + 'static;

    fn attach_printable_lazy<A, F>(self, attachment: F) -> Result<Self::Ok, Self::Context>
    where
        A: fmt::Display + fmt::Debug + Send + Sync + 'static,
        F: FnOnce() -> A;

    fn category(self, category: ErrorCategory) -> Result<Self::Ok, Self::Context>;

    fn change_context<P>(self, context: P) -> Result<Self::Ok, P>
    where
        P: Context;

    fn change_context_lazy<P, F>(self, context: F) -> Result<Self::Ok, P>
    where
        P: Context,
        F: FnOnce() -> P;
}

impl<T, C> ResultExt for Result<T, C>
where
    C: Context,
{
    type Ok = T;
    type Context = C;

    #[track_caller]
    fn anonymize_error(self) -> Result<T> {
        self.map_err(Error::anonymize)
    }

    #[track_caller]
    fn attach<A>(self, attachment: A) -> Result<T, C>
    where
        A: Send + Sync + 'static,
    {
        match self {
            Ok(okay) => Ok(okay),
            Err(error) => Err(error.attach(attachment)),
        }
    }

    #[track_caller]
    fn attach_lazy<A, F>(self, attachment: F) -> Result<T, C>
    where
        A: Send + Sync + 'static,
        F: FnOnce() -> A,
    {
        match self {
            Ok(okay) => Ok(okay),
            Err(error) => Err(error.attach(attachment())),
        }
    }

    #[track_caller]
    fn attach_printable<A>(self, attachment: A) -> Result<T, C>
    where
        A: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Ok(okay) => Ok(okay),
            Err(error) => Err(error.attach_printable(attachment)),
        }
    }

    #[track_caller]
    fn attach_printable_lazy<A, F>(self, attachment: F) -> Result<T, C>
    where
        A: fmt::Display + fmt::Debug + Send + Sync + 'static,
        F: FnOnce() -> A,
    {
        match self {
            Ok(okay) => Ok(okay),
            Err(error) => Err(error.attach_printable(attachment())),
        }
    }

    fn category(self, category: ErrorCategory) -> Result<T, C> {
        self.map_err(|error| error.category(category))
    }

    #[track_caller]
    fn change_context<P>(self, context: P) -> Result<T, P>
    where
        P: Context,
    {
        match self {
            Ok(okay) => Ok(okay),
            Err(error) => Err(error.change_context(context)),
        }
    }

    #[track_caller]
    fn change_context_lazy<P, F>(self, context: F) -> Result<T, P>
    where
        P: Context,
        F: FnOnce() -> P,
    {
        match self {
            Ok(okay) => Ok(okay),
            Err(error) => Err(error.change_context(context())),
        }
    }
}

pub trait IntoTypedError {
    type Ok;
    type Error: Context;

    /// Turns into [`Error`] without using [`IntoError`].
    fn into_typed_error(self) -> Result<Self::Ok, Self::Error>;
}

impl<T, C: Context> IntoTypedError for StdResult<T, C> {
    type Ok = T;
    type Error = C;

    #[track_caller]
    fn into_typed_error(self) -> Result<T, C> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Error::context(ErrorCategory::Unknown, error)),
        }
    }
}

pub trait IntoVenueResult {
    type Ok;
    type Error: Context;

    /// Turns into [`Error`] using [`IntoError`].
    fn into_venue_error(self) -> Result<Self::Ok, Self::Error>;
}

impl<T, C: Context, E: IntoError<Context = C>> IntoVenueResult for StdResult<T, E> {
    type Ok = T;
    type Error = C;

    #[track_caller]
    fn into_venue_error(self) -> Result<T, C> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into_venue_error()),
        }
    }
}
