use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;
use venue_pricing::Pricer;
use venue_settings::Api;

use crate::Client;

pub const HALL_JSON: &str = r#"{
    "_id": "hall-1",
    "name": "Lotus Banquet",
    "location": "Pune",
    "capacity": 300,
    "price_per_day": 10000
}"#;

pub fn client(base: &str) -> Client {
    let api = Api::builder()
        .url(Url::parse(base).unwrap())
        .timeout(Duration::from_secs(5))
        .build();
    Client::new(&api, Pricer::default()).unwrap()
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

struct Canned {
    route: &'static str,
    status: StatusCode,
    body: String,
}

#[derive(Clone)]
struct Backend {
    canned: Arc<Mutex<Vec<Option<Canned>>>>,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

/// Local backend answering each request with the first unused canned
/// response registered for its method and path, like `"GET /hall"`.
pub struct MockBackend {
    pub url: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl MockBackend {
    pub async fn start(responses: Vec<(&'static str, u16, String)>) -> Self {
        let canned = responses
            .into_iter()
            .map(|(route, status, body)| {
                Some(Canned {
                    route,
                    status: StatusCode::from_u16(status).unwrap(),
                    body,
                })
            })
            .collect();

        let backend = Backend {
            canned: Arc::new(Mutex::new(canned)),
            recorded: Arc::new(Mutex::new(Vec::new())),
        };
        let recorded = backend.recorded.clone();

        let app = Router::new().fallback(respond).with_state(backend);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move { axum::serve(listener, app).await });

        Self { url, recorded }
    }

    pub fn client(&self) -> Client {
        client(&self.url)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }
}

async fn respond(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    let key = format!("{method} {path}");

    backend.recorded.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let canned = backend
        .canned
        .lock()
        .unwrap()
        .iter_mut()
        .find(|c| c.as_ref().is_some_and(|c| c.route == key))
        .and_then(Option::take);

    let (status, body) = match canned {
        Some(c) => (c.status, c.body),
        None => (
            StatusCode::NOT_FOUND,
            format!(r#"{{"message":"no canned response for {key}"}}"#),
        ),
    };
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}
