// src/presentation/http/controllers/settings.rs
use crate::application::dto::SettingsDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/backends/{backend_id}/settings",
    params(("backend_id" = i64, Path, description = "Storefront backend id")),
    responses(
        (status = 200, description = "Every settings collection of the backend.", body = SettingsDto),
        (status = 404, description = "Unknown backend.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Settings"
)]
pub async fn get_all_settings(
    Extension(state): Extension<HttpState>,
    Path(backend_id): Path<i64>,
) -> HttpResult<Json<SettingsDto>> {
    state
        .services
        .settings_queries
        .get_all(backend_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/backends/{backend_id}/settings/{collection}",
    params(
        ("backend_id" = i64, Path, description = "Storefront backend id"),
        ("collection" = String, Path, description = "countries, titles, industries, currencies, languages or get_all")
    ),
    responses(
        (status = 200, description = "The requested settings collection.", body = SettingsDto),
        (status = 404, description = "Unknown backend or collection.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Settings"
)]
pub async fn get_settings(
    Extension(state): Extension<HttpState>,
    Path((backend_id, collection)): Path<(i64, String)>,
) -> HttpResult<Json<SettingsDto>> {
    state
        .services
        .settings_queries
        .dispatch(backend_id, &collection)
        .await
        .into_http()
        .map(Json)
}
