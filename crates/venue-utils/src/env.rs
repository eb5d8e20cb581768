use std::error::Error as StdError;
use std::str::FromStr;
use thiserror::Error;

use crate::error::exts::{IntoError, IntoTypedError, ResultExt};
use crate::Result;

#[derive(Debug, Error)]
#[error("Could not load environment variable")]
pub struct LoadEnvError;

#[track_caller]
pub fn var(key: &'static str) -> Result<String, LoadEnvError> {
    dotenvy::var(key).map_err(|v| (v, key).into_venue_error())
}

#[track_caller]
pub fn var_opt(key: &'static str) -> Result<Option<String>, LoadEnvError> {
    use std::env::VarError;
    match dotenvy::var(key) {
        Ok(n) => Ok(Some(n)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(other) => Err((other, key).into_venue_error()),
    }
}

#[track_caller]
pub fn var_opt_parsed<T: FromStr>(key: &'static str) -> Result<Option<T>, LoadEnvError>
where
    T::Err: StdError + Send + Sync + 'static,
{
    let Some(value) = var_opt(key)? else {
        return Ok(None);
    };
    match value.parse() {
        Ok(n) => Ok(Some(n)),
        Err(error) => Err(error)
            .into_typed_error()
            .change_context(LoadEnvError)
            .attach_printable(format!("could not parse value of {key:?} variable")),
    }
}

/// Returns the first variable out of `keys` which is set.
#[track_caller]
pub fn first_var_opt(keys: &[&'static str]) -> Result<Option<String>, LoadEnvError> {
    for key in keys {
        if let Some(value) = var_opt(key)? {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_are_none() {
        let value = var_opt("VENUE_TEST_SURELY_MISSING_VARIABLE").unwrap();
        assert!(value.is_none());

        let value = first_var_opt(&[
            "VENUE_TEST_SURELY_MISSING_VARIABLE",
            "VENUE_TEST_ANOTHER_MISSING_VARIABLE",
        ])
        .unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn missing_required_variable_is_an_error() {
        let error = var("VENUE_TEST_SURELY_MISSING_VARIABLE").unwrap_err();
        assert!(error.contains::<LoadEnvError>());
        assert!(error.to_string().contains("VENUE_TEST_SURELY_MISSING_VARIABLE"));
    }

    #[test]
    fn parses_present_variables() {
        // PATH is present in every test environment we run in
        let path = var_opt_parsed::<std::path::PathBuf>("PATH").unwrap();
        assert!(path.is_some());
    }
}
