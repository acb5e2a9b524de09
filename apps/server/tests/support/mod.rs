//! Shared integration-test harness.
//!
//! Builds the real router over the in-memory store and drives it in-process with
//! `tower::ServiceExt::oneshot`, so no database or socket is needed.

use anyhow::Context as _;
use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use course_api::{
    api::create_router,
    config::{Config, DatabaseBackend},
    state::{AppState, AppStateOptions, StoreKind},
};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tower::ServiceExt;

pub type TestFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + 'a>>;

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let state = AppState::new_with_options(
            config,
            AppStateOptions {
                run_migrations: false,
                store: StoreKind::InMemory,
            },
        )
        .await?;
        let router = create_router(state.clone());
        Ok(Self { state, router })
    }

    /// Send a request with an optional JSON body.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Vec<u8>>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request_with_extra_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Vec<u8>>,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        for (name, value) in extra_headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(body.map(Body::from).unwrap_or_else(Body::empty))?;
        self.send(request).await
    }

    /// Send a url-encoded form body, as browsers and simple clients do.
    pub async fn request_form(
        &self,
        method: Method,
        uri: &str,
        fields: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let encoded = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encoded))?;
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, headers, body))
    }

    /// Create a course through the API and return its JSON representation.
    pub async fn create_course(&self, name: &str) -> anyhow::Result<Value> {
        let (status, _headers, body) = self
            .request(
                Method::POST,
                "/api/v1/courses/",
                Some(to_json_body(&serde_json::json!({ "name": name }))?),
            )
            .await?;
        assert_status(status, StatusCode::CREATED, "create course");
        Ok(serde_json::from_slice(&body)?)
    }

    /// Create `n` courses named `course-0`, `course-1`, ...
    pub async fn create_courses(&self, n: usize) -> anyhow::Result<Vec<Value>> {
        let mut courses = Vec::with_capacity(n);
        for i in 0..n {
            courses.push(self.create_course(&format!("course-{i}")).await?);
        }
        Ok(courses)
    }

    pub async fn course_count(&self) -> anyhow::Result<i64> {
        Ok(self.state.course_service.count_courses().await?)
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.database.backend = DatabaseBackend::Memory;
    config
}

pub async fn with_test_app<F>(f: F) -> anyhow::Result<()>
where
    F: for<'a> FnOnce(&'a TestApp) -> TestFuture<'a>,
{
    with_test_app_with_config(|_| {}, f).await
}

pub async fn with_test_app_with_config<C, F>(configure: C, f: F) -> anyhow::Result<()>
where
    C: FnOnce(&mut Config),
    F: for<'a> FnOnce(&'a TestApp) -> TestFuture<'a>,
{
    let mut config = test_config();
    configure(&mut config);
    let app = TestApp::new(config).await?;
    f(&app).await
}

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "unexpected status for {context}: got {actual}, expected {expected}"
    );
}

pub fn to_json_body(value: &Value) -> anyhow::Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

pub fn json_body(body: &[u8]) -> anyhow::Result<Value> {
    serde_json::from_slice(body).with_context(|| {
        format!(
            "response body is not JSON: {}",
            String::from_utf8_lossy(body)
        )
    })
}

pub fn course_id(course: &Value) -> anyhow::Result<i64> {
    course
        .get("id")
        .and_then(Value::as_i64)
        .context("course has integer id")
}
