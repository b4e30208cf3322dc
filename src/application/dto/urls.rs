use crate::domain::url::UrlMapping;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UrlMappingDto {
    pub id: i64,
    pub url_key: String,
    /// Owner reference formatted as `model,id`.
    pub owner: String,
    pub backend_id: i64,
    pub lang_id: i64,
    pub redirect: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UrlMapping> for UrlMappingDto {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            id: mapping.id.into(),
            url_key: mapping.url_key.into_inner(),
            owner: mapping.owner.to_string(),
            backend_id: mapping.scope.backend.into(),
            lang_id: mapping.scope.lang.into(),
            redirect: mapping.redirect,
            created_at: mapping.created_at,
            updated_at: mapping.updated_at,
        }
    }
}

/// Answer to a lookup of a public url key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UrlResolutionDto {
    pub url_key: String,
    pub owner: String,
    pub redirect: bool,
    /// Current key of the owner when `url_key` only survives as a redirect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_key: Option<String>,
}
