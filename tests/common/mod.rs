//! Shared helpers for the integration test suite.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use base64::Engine;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use yi_restaurant::config::AdminConfig;
use yi_restaurant::error::AppError;
use yi_restaurant::routes::create_router;
use yi_restaurant::state::AppState;
use yi_restaurant::store::{
    create_schema, Reservation, ReservationFields, ReservationStore, SqliteReservationStore,
};

pub const ADMIN_USER: &str = "operator";
pub const ADMIN_PASS: &str = "test-password";

/// Fresh store on a single shared in-memory SQLite connection
pub async fn sqlite_store() -> Arc<SqliteReservationStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    create_schema(&pool).await.expect("schema");
    Arc::new(SqliteReservationStore::new(pool))
}

/// Build the full application router around the given store
pub fn build_test_app(store: Arc<dyn ReservationStore>) -> Router {
    let admin = AdminConfig {
        username: ADMIN_USER.to_string(),
        password: ADMIN_PASS.to_string(),
    };
    let state = Arc::new(AppState::new(store, admin).expect("app state"));
    create_router(state)
}

/// App plus a handle on its store for direct inspection
pub async fn test_app() -> (Router, Arc<SqliteReservationStore>) {
    let store = sqlite_store().await;
    (build_test_app(store.clone()), store)
}

/// Store wrapper counting every call that reaches the inner store.
///
/// Used to prove that rejected requests never touch storage.
pub struct RecordingStore {
    inner: Arc<dyn ReservationStore>,
    calls: AtomicUsize,
}

impl RecordingStore {
    pub fn new(inner: Arc<dyn ReservationStore>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ReservationStore for RecordingStore {
    async fn create(&self, fields: ReservationFields) -> Result<i64, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create(fields).await
    }

    async fn get(&self, id: i64) -> Result<Option<Reservation>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id).await
    }

    async fn list(&self) -> Result<Vec<Reservation>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list().await
    }

    async fn update(&self, id: i64, fields: ReservationFields) -> Result<bool, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id).await
    }
}

/// Value for an `Authorization` header with the given Basic credentials
pub fn basic_auth(username: &str, password: &str) -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}

/// Issue a GET request without credentials
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a GET request with Basic credentials
pub async fn get_with_auth(app: Router, uri: &str, username: &str, password: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth(username, password))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue an application/x-www-form-urlencoded POST, optionally authenticated
pub async fn post_form(
    app: Router,
    uri: &str,
    body: &str,
    auth: Option<(&str, &str)>,
) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if let Some((username, password)) = auth {
        builder = builder.header(header::AUTHORIZATION, basic_auth(username, password));
    }

    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a string
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
