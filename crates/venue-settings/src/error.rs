use thiserror::Error;

#[derive(Debug, Error)]
#[error("Could not load venue settings")]
pub struct SettingsLoadError;
