// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use base_url::application::ports::{time::Clock, util::SlugGenerator};
use base_url::application::services::ApplicationServices;
use base_url::domain::catalog::CatalogUnitOfWork;
use base_url::domain::settings::SettingsRepository;
use base_url::domain::url::UrlMappingReadRepository;
use base_url::infrastructure::util::DefaultSlugGenerator;
use base_url::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// Services over the given in-memory catalog and the fixture settings.
pub fn build_services(catalog: &mocks::InMemoryCatalog, clock: Arc<dyn Clock>) -> ApplicationServices {
    let unit_of_work: Arc<dyn CatalogUnitOfWork> = Arc::new(catalog.clone());
    let url_read: Arc<dyn UrlMappingReadRepository> = Arc::new(catalog.clone());
    let settings: Arc<dyn SettingsRepository> = Arc::new(mocks::InMemorySettings);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    ApplicationServices::new(unit_of_work, url_read, settings, clock, slugger)
}

pub fn build_test_state(catalog: &mocks::InMemoryCatalog) -> HttpState {
    HttpState {
        services: Arc::new(build_services(catalog, Arc::new(mocks::StepClock::default()))),
    }
}

pub fn make_test_router(catalog: &mocks::InMemoryCatalog) -> axum::Router {
    build_router(build_test_state(catalog), &["*".to_string()])
}

/// Send one request and decode the JSON body.
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match payload {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected a json body")
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: axum::response::Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
