#![allow(unused)]
#[allow(unused)]
mod support;

use axum::http::{Method, StatusCode};
use support::*;

#[tokio::test]
async fn security_headers_are_present() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, headers, _body) = app.request(Method::GET, "/health", None).await?;
            assert_status(status, StatusCode::OK, "health");

            for (name, expected) in [
                ("x-content-type-options", "nosniff"),
                ("x-frame-options", "DENY"),
                ("referrer-policy", "no-referrer"),
                ("content-security-policy", "default-src 'none'"),
            ] {
                let got = headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("");
                assert_eq!(got, expected, "missing/incorrect header '{}'", name);
            }

            // HSTS should not be set for plain HTTP requests.
            assert!(headers.get("strict-transport-security").is_none());

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn cors_is_not_permissive_by_default() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, headers, _body) = app
                .request_with_extra_headers(
                    Method::GET,
                    "/health",
                    None,
                    &[("origin", "https://evil.example")],
                )
                .await?;
            assert_status(status, StatusCode::OK, "health");
            assert!(
                headers.get("access-control-allow-origin").is_none(),
                "expected no permissive CORS by default"
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn hsts_is_set_behind_tls_terminating_proxy() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (_status, headers, _body) = app
                .request_with_extra_headers(
                    Method::GET,
                    "/api/v1/courses/",
                    None,
                    &[("x-forwarded-proto", "https")],
                )
                .await?;
            assert!(headers.get("strict-transport-security").is_some());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn configured_cors_origin_is_allowed() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| config.server.cors_origins = vec!["https://app.example".to_string()],
        |app| {
            Box::pin(async move {
                let (status, headers, _body) = app
                    .request_with_extra_headers(
                        Method::GET,
                        "/api/v1/courses/",
                        None,
                        &[("origin", "https://app.example")],
                    )
                    .await?;
                assert_status(status, StatusCode::OK, "list courses");
                assert_eq!(
                    headers
                        .get("access-control-allow-origin")
                        .and_then(|v| v.to_str().ok()),
                    Some("https://app.example")
                );
                Ok(())
            })
        },
    )
    .await
}

#[tokio::test]
async fn request_id_is_echoed() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (_status, headers, _body) = app
                .request_with_extra_headers(
                    Method::GET,
                    "/api/v1/courses/",
                    None,
                    &[("x-request-id", "trace-abc-123")],
                )
                .await?;
            assert_eq!(
                headers.get("x-request-id").and_then(|v| v.to_str().ok()),
                Some("trace-abc-123")
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn request_id_is_generated_when_absent() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (_status, headers, _body) =
                app.request(Method::GET, "/api/v1/courses/999/", None).await?;
            let id = headers
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            assert!(uuid::Uuid::parse_str(id).is_ok(), "not a uuid: {id:?}");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn error_responses_carry_security_headers() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, headers, _body) = app
                .request(Method::DELETE, "/api/v1/courses/1/", None)
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "delete missing course");
            assert_eq!(
                headers
                    .get("x-content-type-options")
                    .and_then(|v| v.to_str().ok()),
                Some("nosniff")
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn health_reports_version() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app.request(Method::GET, "/health", None).await?;
            assert_status(status, StatusCode::OK, "health");
            let data = json_body(&body)?;
            assert_eq!(data["status"], "ok");
            assert_eq!(data["version"], env!("CARGO_PKG_VERSION"));
            Ok(())
        })
    })
    .await
}
