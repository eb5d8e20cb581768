use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::trace;
use url::Url;
use venue_pricing::Pricer;
use venue_settings::Api;
use venue_utils::error::exts::{IntoTypedError, IntoVenueResult, ResultExt};
use venue_utils::http::tags::{HttpErrorInfo, RequestTag};
use venue_utils::{Error, ErrorCategory, Result, Suggestion};

use crate::errors::{
    BackendMessage, BuildClientError, MissingSessionError, RequestHttpError, WrongRoleError,
};
use crate::routes::{Access, Route};
use crate::session::Session;
use venue_schema::types::Role;

const USER_AGENT: &str = concat!("venue/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
    pricer: Pricer,
}

impl Client {
    pub fn new(api: &Api, pricer: Pricer) -> Result<Self, BuildClientError> {
        let http = reqwest::Client::builder()
            .timeout(api.timeout)
            .user_agent(USER_AGENT)
            .build()
            .into_venue_error()
            .change_context(BuildClientError)?;

        Ok(Self {
            http,
            base: api.url.clone(),
            pricer,
        })
    }

    #[must_use]
    pub fn pricer(&self) -> &Pricer {
        &self.pricer
    }
}

impl Client {
    pub(crate) fn url_for(&self, route: &Route<'_>) -> Result<Url, RequestHttpError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| Error::context(ErrorCategory::User, RequestHttpError))
            .attach_printable_lazy(|| format!("{} cannot be used as a base URL", self.base))?
            .pop_if_empty()
            .extend(route.segments());
        Ok(url)
    }

    /// Starts a request to `route`, checking first whether `session`
    /// is allowed to call it.
    pub(crate) fn request(
        &self,
        route: &Route<'_>,
        session: Option<&Session>,
    ) -> Result<reqwest::RequestBuilder, RequestHttpError> {
        check_access(route, session).attach(RequestTag::new(route.method(), route.path()))?;

        let url = self.url_for(route)?;
        let mut builder = self.http.request(route.method(), url);
        if let Some(session) = session {
            builder = builder.bearer_auth(session.token().as_str());
        }
        Ok(builder)
    }

    #[tracing::instrument(skip_all, fields(
        request.method = %route.method(),
        request.path = %route.path(),
    ))]
    pub(crate) async fn send<M: DeserializeOwned>(
        &self,
        route: &Route<'_>,
        request: reqwest::RequestBuilder,
    ) -> Result<M, RequestHttpError> {
        let tag = RequestTag::new(route.method(), route.path());
        let request = request
            .build()
            .into_venue_error()
            .change_context(RequestHttpError)
            .attach(tag.clone())?;

        trace!("sending request");
        let response = self
            .http
            .execute(request)
            .await
            .into_venue_error()
            .change_context(RequestHttpError)
            .attach(tag.clone())?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .into_venue_error()
            .change_context(RequestHttpError)
            .attach(tag.clone())?;

        trace!(%status, len = body.len(), "received response");
        decode_response(route, status, &body).attach(tag)
    }
}

fn check_access(route: &Route<'_>, session: Option<&Session>) -> Result<(), RequestHttpError> {
    let expected = match route.access() {
        Access::Public => return Ok(()),
        Access::Session => None,
        Access::User => Some(Role::User),
        Access::Admin => Some(Role::Admin),
    };

    let Some(session) = session else {
        return Err(Error::context(ErrorCategory::User, MissingSessionError))
            .change_context(RequestHttpError)
            .attach(Suggestion::LogIn {
                admin: expected == Some(Role::Admin),
            });
    };

    match expected {
        Some(expected) if expected != session.role() => {
            let error = WrongRoleError {
                expected,
                actual: session.role(),
            };
            Err(Error::context(ErrorCategory::User, error).change_context(RequestHttpError))
                .attach(Suggestion::LogIn {
                    admin: expected == Role::Admin,
                })
        }
        _ => Ok(()),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "error", alias = "msg")]
    message: String,
}

/// Turns a raw response into `M`, or into an error describing
/// why the backend refused the request.
pub(crate) fn decode_response<M: DeserializeOwned>(
    route: &Route<'_>,
    status: StatusCode,
    body: &[u8],
) -> Result<M, RequestHttpError> {
    if !status.is_success() {
        return Err(status_error(status, body));
    }

    let value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(body)
            .into_typed_error()
            .change_context(RequestHttpError)
            .category(ErrorCategory::Backend)
            .attach(HttpErrorInfo::Decode)?
    };

    serde_json::from_value(unwrap_envelope(route.envelope(), value))
        .into_typed_error()
        .change_context(RequestHttpError)
        .category(ErrorCategory::Backend)
        .attach(HttpErrorInfo::Decode)
}

fn unwrap_envelope(key: Option<&str>, value: Value) -> Value {
    let Some(key) = key else {
        return value;
    };
    match value {
        Value::Object(mut map) => match map.remove(key).or_else(|| map.remove("data")) {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}

fn status_error(status: StatusCode, body: &[u8]) -> Error<RequestHttpError> {
    // Validation failures are on the caller, the rest is up to the backend.
    let category = match status {
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            ErrorCategory::User
        }
        _ => ErrorCategory::Backend,
    };

    let mut error = Error::context(category, RequestHttpError)
        .attach(HttpErrorInfo::Status(status.as_u16()));

    if let Some(message) = backend_message(body) {
        error = error.attach_printable(BackendMessage(message));
    }

    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        error = error.attach(Suggestion::RenewSession);
    }

    error
}

fn backend_message(body: &[u8]) -> Option<String> {
    if let Ok(body) = serde_json::from_slice::<ErrorBody>(body) {
        return Some(body.message);
    }

    let text = std::str::from_utf8(body).ok()?.trim();
    let looks_like_text = !text.is_empty() && !text.starts_with('<') && !text.starts_with('{');
    looks_like_text.then(|| text.to_string())
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use serde::de::IgnoredAny;
    use static_assertions::assert_impl_all;
    use venue_schema::types::Hall;
    use venue_schema::HallId;
    use venue_utils::http::HttpErrorExt;

    assert_impl_all!(Client: Send, Sync, Clone);

    #[test]
    fn urls_keep_base_path_and_encode_ids() {
        let client = test_utils::client("http://localhost:5000/api/");
        let id = HallId::new("lotus hall/1");
        let url = client.url_for(&Route::Hall { id: &id }).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/hall/lotus%20hall%2F1");

        let client = test_utils::client("http://localhost:5000");
        let url = client.url_for(&Route::Halls).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/hall");
    }

    #[test]
    fn authenticated_requests_carry_bearer_token() {
        let client = test_utils::client("http://localhost:5000");
        let session = Session::new(Role::User, "tok");
        let request = client
            .request(&Route::UserBookings, Some(&session))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer tok"
        );
    }

    #[test]
    fn public_requests_have_no_authorization() {
        let client = test_utils::client("http://localhost:5000");
        let request = client.request(&Route::Halls, None).unwrap().build().unwrap();
        assert!(request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .is_none());
    }

    #[test]
    fn admin_routes_reject_user_sessions() {
        let client = test_utils::client("http://localhost:5000");
        let session = Session::new(Role::User, "tok");
        let error = client
            .request(&Route::CreateHall, Some(&session))
            .unwrap_err();

        assert!(error.get_category().is_user_error());
        let role = error.downcast_ref::<WrongRoleError>().unwrap();
        assert_eq!(role.expected, Role::Admin);
        assert_eq!(role.actual, Role::User);
        assert_eq!(
            error.downcast_ref::<Suggestion>(),
            Some(&Suggestion::LogIn { admin: true })
        );
    }

    #[test]
    fn user_routes_need_a_session() {
        let client = test_utils::client("http://localhost:5000");
        let error = client.request(&Route::BookHall, None).unwrap_err();
        assert!(error.get_category().is_user_error());
        assert!(error.contains::<MissingSessionError>());
        assert!(error.contains::<Suggestion>());
    }

    #[test]
    fn decodes_enveloped_and_bare_payloads() {
        let wrapped = format!(r#"{{"message":"ok","halls":[{}]}}"#, test_utils::HALL_JSON);
        let halls: Vec<Hall> =
            decode_response(&Route::Halls, StatusCode::OK, wrapped.as_bytes()).unwrap();
        assert_eq!(halls.len(), 1);

        let bare = format!("[{}]", test_utils::HALL_JSON);
        let halls: Vec<Hall> =
            decode_response(&Route::Halls, StatusCode::OK, bare.as_bytes()).unwrap();
        assert_eq!(halls[0].id.as_str(), "hall-1");
    }

    #[test]
    fn empty_body_is_fine_when_ignored() {
        let id = HallId::new("h1");
        let _: IgnoredAny =
            decode_response(&Route::DeleteHall { id: &id }, StatusCode::NO_CONTENT, b"").unwrap();
    }

    #[test]
    fn failed_status_keeps_backend_message() {
        let result: Result<IgnoredAny, RequestHttpError> = decode_response(
            &Route::BookHall,
            StatusCode::BAD_REQUEST,
            br#"{"message":"Hall already booked for these dates"}"#,
        );

        assert_eq!(result.http_error_info(), Some(&HttpErrorInfo::Status(400)));
        let error = result.unwrap_err();
        assert!(error.get_category().is_user_error());
        assert_eq!(
            error.downcast_ref::<BackendMessage>().unwrap().as_str(),
            "Hall already booked for these dates"
        );
    }

    #[test]
    fn unauthorized_suggests_logging_in() {
        let error = decode_response::<IgnoredAny>(
            &Route::UserBookings,
            StatusCode::UNAUTHORIZED,
            b"Unauthorized",
        )
        .unwrap_err();

        assert!(!error.get_category().is_user_error());
        assert!(error.contains::<Suggestion>());
        assert_eq!(
            error.downcast_ref::<BackendMessage>().unwrap().as_str(),
            "Unauthorized"
        );
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let error = decode_response::<Vec<Hall>>(&Route::Halls, StatusCode::OK, b"{not json")
            .unwrap_err();
        assert_eq!(error.http_error_info(), Some(&HttpErrorInfo::Decode));

        let error = decode_response::<Vec<Hall>>(&Route::Halls, StatusCode::OK, b"{\"halls\":1}")
            .unwrap_err();
        assert_eq!(error.http_error_info(), Some(&HttpErrorInfo::Decode));
    }
}
