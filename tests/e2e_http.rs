// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{InMemoryCatalog, assert_error_response, make_test_router, send_json};

/// /health が200を返す
#[tokio::test]
async fn health_returns_ok() {
    let app = make_test_router(&InMemoryCatalog::new());

    let (status, body) = send_json(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    let direct = base_url::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

/// 商品の作成・更新・解決・削除の一連の流れ
#[tokio::test]
async fn product_urls_follow_renames_over_http() {
    let catalog = InMemoryCatalog::new();
    let app = make_test_router(&catalog);

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/v1/products",
        Some(json!({ "backend_id": 1, "lang_id": 1, "name": "Red Shoes" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["records"][0]["url_key"], "red-shoes");
    assert_eq!(created["records"][0]["url_builder"], "auto");
    assert!(created.get("warnings").is_none());
    let id = created["records"][0]["id"].as_i64().unwrap();

    let (status, updated) = send_json(
        &app,
        "PATCH",
        &format!("/api/v1/products/{id}"),
        Some(json!({ "url_builder": "manual", "manual_url_key": "Rote Schuhe!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["records"][0]["url_key"], "rote-schuhe");
    assert_eq!(updated["warnings"][0]["title"], "Adapt text rules");

    let (status, stale) =
        send_json(&app, "GET", "/api/v1/backends/1/urls/1/red-shoes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stale["redirect"], true);
    assert_eq!(stale["canonical_key"], "rote-schuhe");
    assert_eq!(stale["owner"], format!("product,{id}"));

    let (status, live) =
        send_json(&app, "GET", "/api/v1/backends/1/urls/1/rote-schuhe", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(live["redirect"], false);
    assert!(live.get("canonical_key").is_none());

    let (status, redirects) = send_json(
        &app,
        "GET",
        &format!("/api/v1/urls/product/{id}?redirects=true"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(redirects.as_array().unwrap().len(), 1);

    let (status, deleted) =
        send_json(&app, "DELETE", &format!("/api/v1/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["status"], "deleted");

    let (status, mappings) =
        send_json(&app, "GET", &format!("/api/v1/urls/product/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(mappings.as_array().unwrap().is_empty());
}

/// 他の商品の有効キーを要求すると409
#[tokio::test]
async fn taken_key_returns_conflict() {
    let catalog = InMemoryCatalog::new();
    let app = make_test_router(&catalog);
    for name in ["Shoes", "Boots"] {
        let (status, _) = send_json(
            &app,
            "POST",
            "/api/v1/products",
            Some(json!({ "backend_id": 1, "lang_id": 1, "name": name })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let req = Request::builder()
        .method("PATCH")
        .uri("/api/v1/products/2")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "url_builder": "manual", "manual_url_key": "shoes" }).to_string(),
        ))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
    assert_eq!(catalog.active_keys_of("product,2"), vec!["boots".to_string()]);
}

/// 手動モードでキーなしは400
#[tokio::test]
async fn manual_mode_without_key_returns_bad_request() {
    let app = make_test_router(&InMemoryCatalog::new());

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/categories")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "backend_id": 1, "lang_id": 1, "name": "Sale", "url_builder": "manual" })
                .to_string(),
        ))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// 未登録キーの解決は404
#[tokio::test]
async fn unknown_url_returns_not_found() {
    let app = make_test_router(&InMemoryCatalog::new());

    let req = Request::builder()
        .uri("/api/v1/backends/1/urls/1/nowhere")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 設定エンドポイント
#[tokio::test]
async fn settings_endpoints_return_collections() {
    let app = make_test_router(&InMemoryCatalog::new());

    let (status, all) = send_json(&app, "GET", "/api/v1/backends/1/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["countries"].as_array().unwrap().len(), 5);
    assert_eq!(all["languages"][0]["name"], "English (US)");

    let (status, currencies) =
        send_json(&app, "GET", "/api/v1/backends/1/settings/currencies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(currencies["currencies"][1]["name"], "USD");
    assert!(currencies.get("countries").is_none());

    let (status, _) = send_json(&app, "GET", "/api/v1/backends/1/settings/partners", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, "GET", "/api/v1/backends/9/settings", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// OpenAPI ドキュメントが配信される
#[tokio::test]
async fn openapi_document_is_served() {
    let app = make_test_router(&InMemoryCatalog::new());

    let (status, doc) = send_json(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/v1/categories/{id}").is_some());
    assert_eq!(doc["info"]["title"], "Base Url API");
}
