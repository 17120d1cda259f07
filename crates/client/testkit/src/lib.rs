//! Loopback wishlist backend for integration tests.
//!
//! An [`axum::Router`] with a single fallback handler answers every request
//! from a canned `(method, path)` table and records what it received. Unknown
//! routes answer 404.
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const PROFILE: &str = r#"{"id":1,"telegram_id":42,"first_name":"Anna","created_at":"2024-05-01T10:00:00","wishes_count":2}"#;
pub const WISH_PAGE: &str = r#"{"items":[{"id":5,"user_id":1,"title":"Book","created_at":"now"}],"total":1,"page":1,"page_size":20,"total_pages":1}"#;
pub const WISH: &str = r#"{"id":5,"user_id":1,"title":"Book","created_at":"now"}"#;
pub const COMPLETED_WISH: &str = r#"{"id":5,"user_id":1,"title":"Book","status":"completed","created_at":"now"}"#;
pub const GROUPS: &str = r#"[{"id":3,"name":"Family","creator_id":1,"invite_code":"x7Kp2","created_at":"now","member_count":4}]"#;
pub const GROUP: &str = r#"{"id":3,"name":"Family","creator_id":1,"invite_code":"x7Kp2","created_at":"now"}"#;
pub const MEMBER: &str = r#"{"id":9,"group_id":3,"user_id":1,"role":"member","joined_at":"now"}"#;

const NOT_FOUND: &str = r#"{"detail":"Not found"}"#;

/// Header carrying the host's signed launch token.
pub const INIT_DATA_HEADER: &str = "x-telegram-init-data";

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    /// Path without the query string.
    pub path: String,
    /// Path and query string.
    pub target: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl Hit {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn init_data(&self) -> Option<&str> {
        self.header(INIT_DATA_HEADER)
    }
}

type Routes = HashMap<(Method, String), (StatusCode, String)>;

struct BackendState {
    routes: Routes,
    hits: Mutex<Vec<Hit>>,
}

/// Routed stub backend bound to an ephemeral loopback port.
///
/// The server task is aborted when the backend is dropped.
pub struct StubBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
    task: JoinHandle<()>,
}

impl StubBackend {
    /// Serve `(method, path, status, body)` routes until dropped.
    ///
    /// # Panics
    ///
    /// On an invalid method or status in the table, or if the loopback
    /// listener cannot be bound.
    pub async fn start(routes: &[(&str, &str, u16, &str)]) -> Self {
        let routes = routes
            .iter()
            .map(|(method, path, status, body)| {
                let method = Method::from_bytes(method.as_bytes()).expect("valid method");
                let status = StatusCode::from_u16(*status).expect("valid status");
                ((method, path.to_string()), (status, body.to_string()))
            })
            .collect();

        let state = Arc::new(BackendState {
            routes,
            hits: Mutex::new(Vec::new()),
        });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");

        let app = Router::new().fallback(record).with_state(state.clone());
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state, task }
    }

    /// Every endpoint the wishlist service touches, answering the fixtures
    /// above.
    pub async fn wishlist() -> Self {
        Self::start(&[
            ("GET", "/api/user/profile/", 200, PROFILE),
            ("GET", "/api/wishes/", 200, WISH_PAGE),
            ("POST", "/api/wishes/", 201, WISH),
            ("GET", "/api/wishes/5/", 200, WISH),
            ("PATCH", "/api/wishes/5/complete/", 200, COMPLETED_WISH),
            ("DELETE", "/api/wishes/5/", 204, ""),
            ("GET", "/api/groups/", 200, GROUPS),
            ("POST", "/api/groups/", 201, GROUP),
            ("GET", "/api/groups/3/", 200, GROUP),
            ("GET", "/api/groups/3/wishes/", 200, "[]"),
            ("POST", "/api/groups/3/join/", 200, MEMBER),
        ])
        .await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far, in arrival order.
    pub fn hits(&self) -> Vec<Hit> {
        self.state
            .hits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received for `method path`, query string ignored.
    pub fn count(&self, method: &str, path: &str) -> usize {
        self.hits()
            .iter()
            .filter(|hit| hit.method == method && hit.path == path)
            .count()
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn record(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());

    let (status, reply) = state
        .routes
        .get(&(method.clone(), path.clone()))
        .cloned()
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, NOT_FOUND.to_string()));

    state
        .hits
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(Hit {
            method: method.to_string(),
            path,
            target,
            headers,
            body,
        });

    (status, [(CONTENT_TYPE, "application/json")], reply).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_route_is_recorded_as_not_found() {
        let backend = StubBackend::start(&[("GET", "/api/groups/", 200, "[]")]).await;

        let response = reqwest::Client::new()
            .get(format!("{}/api/missing/?page=2", backend.base_url()))
            .header("X-Telegram-Init-Data", "t")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);
        assert!(response.text().await.unwrap().contains("Not found"));

        let hits = backend.hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "/api/missing/");
        assert_eq!(hits[0].target, "/api/missing/?page=2");
        assert_eq!(hits[0].init_data(), Some("t"));
        assert_eq!(backend.count("GET", "/api/missing/"), 1);
    }
}
