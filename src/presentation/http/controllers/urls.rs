// src/presentation/http/controllers/urls.rs
use crate::application::{
    dto::{UrlMappingDto, UrlResolutionDto},
    queries::urls::ResolveUrlQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OwnerMappingsParams {
    /// Only list stale keys kept for redirection.
    #[serde(default)]
    pub redirects: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/backends/{backend_id}/urls/{lang_id}/{url_key}",
    params(
        ("backend_id" = i64, Path, description = "Storefront backend id"),
        ("lang_id" = i64, Path, description = "Language id"),
        ("url_key" = String, Path, description = "Public url key")
    ),
    responses(
        (status = 200, description = "Owner of the key, with the canonical key when it only redirects.", body = UrlResolutionDto),
        (status = 404, description = "No mapping for this key.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Urls"
)]
pub async fn resolve_url(
    Extension(state): Extension<HttpState>,
    Path((backend_id, lang_id, url_key)): Path<(i64, i64, String)>,
) -> HttpResult<Json<UrlResolutionDto>> {
    state
        .services
        .url_queries
        .resolve(ResolveUrlQuery {
            backend_id,
            lang_id,
            url_key,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/urls/{model}/{id}",
    params(
        ("model" = String, Path, description = "Owner model, e.g. product"),
        ("id" = i64, Path, description = "Owner record id"),
        OwnerMappingsParams
    ),
    responses(
        (status = 200, description = "Url mappings owned by the record.", body = [UrlMappingDto]),
        (status = 400, description = "Malformed owner reference.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Urls"
)]
pub async fn list_owner_mappings(
    Extension(state): Extension<HttpState>,
    Path((model, id)): Path<(String, i64)>,
    Query(params): Query<OwnerMappingsParams>,
) -> HttpResult<Json<Vec<UrlMappingDto>>> {
    let owner = format!("{model},{id}");
    let queries = &state.services.url_queries;
    let result = if params.redirects {
        queries.redirects_for(&owner).await
    } else {
        queries.mappings_for(&owner).await
    };
    result.into_http().map(Json)
}
