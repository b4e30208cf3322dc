// src/presentation/http/controllers/catalog.rs
use crate::application::{
    commands::records::{
        CreateCategoryCommand, CreateProductCommand, DeleteCategoryCommand, DeleteProductCommand,
        UpdateCategoryCommand, UpdateProductCommand, UrlKeyInput,
    },
    dto::{CategoryDto, ProductDto, RecordOutcome, UrlBuilderModeDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Url fields accepted by every url keyed record.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UrlKeyRequest {
    pub url_builder: Option<UrlBuilderModeDto>,
    /// Normalized before use; an empty string clears it.
    pub manual_url_key: Option<String>,
    pub active: Option<bool>,
}

impl UrlKeyRequest {
    fn into_input(self, lang_id: Option<i64>) -> UrlKeyInput {
        UrlKeyInput {
            url_builder: self.url_builder.map(Into::into),
            manual_url_key: self.manual_url_key,
            lang_id,
            active: self.active,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub backend_id: i64,
    pub lang_id: i64,
    pub name: String,
    pub default_code: Option<String>,
    #[serde(flatten)]
    pub url: UrlKeyRequest,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    /// An empty string removes the reference code.
    pub default_code: Option<String>,
    pub lang_id: Option<i64>,
    #[serde(flatten)]
    pub url: UrlKeyRequest,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub backend_id: i64,
    pub lang_id: i64,
    pub name: String,
    #[serde(flatten)]
    pub url: UrlKeyRequest,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub lang_id: Option<i64>,
    #[serde(flatten)]
    pub url: UrlKeyRequest,
}

fn deleted() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "deleted".into(),
    })
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created and its url published.", body = RecordOutcome<ProductDto>),
        (status = 400, description = "Invalid url settings.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Url key owned by another record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateProductRequest>,
) -> HttpResult<(StatusCode, Json<RecordOutcome<ProductDto>>)> {
    let command = CreateProductCommand {
        backend_id: payload.backend_id,
        lang_id: payload.lang_id,
        name: payload.name,
        default_code: payload.default_code,
        url: payload.url.into_input(None),
    };

    state
        .services
        .record_commands
        .create_product(command)
        .await
        .into_http()
        .map(|outcome| (StatusCode::CREATED, Json(outcome)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated and its urls synchronized.", body = RecordOutcome<ProductDto>),
        (status = 404, description = "Unknown product.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Url key owned by another record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductRequest>,
) -> HttpResult<Json<RecordOutcome<ProductDto>>> {
    let command = UpdateProductCommand {
        id,
        name: payload.name,
        default_code: payload.default_code,
        url: payload.url.into_input(payload.lang_id),
    };

    state
        .services
        .record_commands
        .update_product(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product and every url mapping it owned removed.", body = StatusResponse),
        (status = 404, description = "Unknown product.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .record_commands
        .delete_product(DeleteProductCommand { id })
        .await
        .into_http()?;

    Ok(deleted())
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created and its url published.", body = RecordOutcome<CategoryDto>),
        (status = 400, description = "Invalid url settings.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Url key owned by another record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<RecordOutcome<CategoryDto>>)> {
    let command = CreateCategoryCommand {
        backend_id: payload.backend_id,
        lang_id: payload.lang_id,
        name: payload.name,
        url: payload.url.into_input(None),
    };

    state
        .services
        .record_commands
        .create_category(command)
        .await
        .into_http()
        .map(|outcome| (StatusCode::CREATED, Json(outcome)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated and its urls synchronized.", body = RecordOutcome<CategoryDto>),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Url key owned by another record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<RecordOutcome<CategoryDto>>> {
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        url: payload.url.into_input(payload.lang_id),
    };

    state
        .services
        .record_commands
        .update_category(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category and every url mapping it owned removed.", body = StatusResponse),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .record_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(deleted())
}
