use super::{Error, ErrorCategory};

use crate::env::LoadEnvError;
use error_stack::Context;

/// This trait is applied with types that cannot be converted into
/// [`Error`] with a plain `From` implementation or where the conversion
/// should attach extra information about the failure.
pub trait IntoError {
    type Context: Context;

    /// Turns from any error into [`venue_utils::Error`](Error).
    ///
    /// Make sure to put `#[track_caller]` attribute on top of the
    /// function declaration as you may not find where the error
    /// was emitted if not placed.
    fn into_venue_error(self) -> Error<Self::Context>;
}

impl IntoError for (dotenvy::Error, &'static str) {
    type Context = LoadEnvError;

    #[track_caller]
    fn into_venue_error(self) -> Error<Self::Context> {
        use std::env::VarError;

        let var = self.1;
        match self.0 {
            dotenvy::Error::EnvVar(VarError::NotPresent) => {
                Error::context(ErrorCategory::Unknown, LoadEnvError)
                    .attach_printable(format!("{var:?} variable is required to be set"))
            }
            dotenvy::Error::EnvVar(VarError::NotUnicode(..)) => {
                Error::context(ErrorCategory::Unknown, LoadEnvError)
                    .attach_printable(format!("{var:?} variable must contain valid UTF-8 text"))
            }
            other => Error::context(ErrorCategory::Unknown, other)
                .change_context(LoadEnvError)
                .attach_printable(format!("could not read {var:?} variable")),
        }
    }
}
