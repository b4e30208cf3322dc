// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::settings::get_all_settings,
        crate::presentation::http::controllers::settings::get_settings,
        crate::presentation::http::controllers::urls::resolve_url,
        crate::presentation::http::controllers::urls::list_owner_mappings,
        crate::presentation::http::controllers::catalog::create_product,
        crate::presentation::http::controllers::catalog::update_product,
        crate::presentation::http::controllers::catalog::delete_product,
        crate::presentation::http::controllers::catalog::create_category,
        crate::presentation::http::controllers::catalog::update_category,
        crate::presentation::http::controllers::catalog::delete_category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::catalog::UrlKeyRequest,
            crate::presentation::http::controllers::catalog::CreateProductRequest,
            crate::presentation::http::controllers::catalog::UpdateProductRequest,
            crate::presentation::http::controllers::catalog::CreateCategoryRequest,
            crate::presentation::http::controllers::catalog::UpdateCategoryRequest,
            crate::application::dto::SettingsDto,
            crate::application::dto::SettingsEntryDto,
            crate::application::dto::UrlMappingDto,
            crate::application::dto::UrlResolutionDto,
            crate::application::dto::UrlBuilderModeDto,
            crate::application::dto::UrlFieldsDto,
            crate::application::dto::ProductDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::AdvisoryDto
        )
    ),
    tags(
        (name = "Settings", description = "Storefront settings lookups"),
        (name = "Urls", description = "Url key resolution and history"),
        (name = "Catalog", description = "Url keyed catalog records"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Base Url API",
        description = "Canonical and redirect url keys for catalog records",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route(OPENAPI_PATH, get(serve_openapi))
}
