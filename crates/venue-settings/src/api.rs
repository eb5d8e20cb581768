use doku::Document;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;

#[serde_as]
#[derive(Debug, Clone, Deserialize, Document, Serialize, TypedBuilder)]
pub struct Api {
    /// Base URL of the venue backend's REST API. Every route is
    /// resolved against it.
    ///
    /// It can also be set with `VENUE_API_URL` or `API_URL`.
    #[doku(as = "String", example = "http://localhost:5000")]
    pub url: Url,

    /// Timeout for every HTTP request made to the backend.
    ///
    /// The default value is 10 seconds if not set.
    #[builder(default = Api::DEFAULT_TIMEOUT)]
    #[doku(as = "String", example = "10s")]
    #[serde(default = "Api::default_timeout")]
    #[serde_as(as = "venue_utils::serial::AsHumanDuration")]
    pub timeout: Duration,
}

impl Api {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    const fn default_timeout() -> Duration {
        Self::DEFAULT_TIMEOUT
    }
}
