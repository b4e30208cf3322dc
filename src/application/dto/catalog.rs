use crate::domain::catalog::{Category, Product};
use crate::domain::url::{NormalizationAdvisory, UrlBuilderMode, UrlKeyState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UrlBuilderModeDto {
    Auto,
    Manual,
}

impl From<UrlBuilderModeDto> for UrlBuilderMode {
    fn from(value: UrlBuilderModeDto) -> Self {
        match value {
            UrlBuilderModeDto::Auto => Self::Automatic,
            UrlBuilderModeDto::Manual => Self::Manual,
        }
    }
}

impl From<UrlBuilderMode> for UrlBuilderModeDto {
    fn from(value: UrlBuilderMode) -> Self {
        match value {
            UrlBuilderMode::Automatic => Self::Auto,
            UrlBuilderMode::Manual => Self::Manual,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UrlFieldsDto {
    pub url_builder: UrlBuilderModeDto,
    pub automatic_url_key: String,
    pub manual_url_key: Option<String>,
    pub url_key: String,
    pub lang_id: i64,
    pub active: bool,
}

impl From<UrlKeyState> for UrlFieldsDto {
    fn from(url: UrlKeyState) -> Self {
        Self {
            url_builder: url.builder.into(),
            automatic_url_key: url.automatic_key,
            manual_url_key: url.manual_key,
            url_key: url.url_key,
            lang_id: url.lang.into(),
            active: url.active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub backend_id: i64,
    pub name: String,
    pub default_code: Option<String>,
    #[serde(flatten)]
    pub url: UrlFieldsDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            backend_id: product.backend.into(),
            name: product.name.into_inner(),
            default_code: product.default_code,
            url: product.url.into(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub backend_id: i64,
    pub name: String,
    #[serde(flatten)]
    pub url: UrlFieldsDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            backend_id: category.backend.into(),
            name: category.name.into_inner(),
            url: category.url.into(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdvisoryDto {
    pub title: String,
    pub message: String,
}

impl From<NormalizationAdvisory> for AdvisoryDto {
    fn from(advisory: NormalizationAdvisory) -> Self {
        Self {
            title: advisory.title,
            message: advisory.message,
        }
    }
}

/// Result of a write command: the stored records plus non-blocking notices.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct RecordOutcome<T> {
    pub records: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AdvisoryDto>,
}

impl<T> RecordOutcome<T> {
    pub fn new(records: Vec<T>, advisories: Vec<NormalizationAdvisory>) -> Self {
        Self {
            records,
            warnings: advisories.into_iter().map(AdvisoryDto::from).collect(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> RecordOutcome<U> {
        RecordOutcome {
            records: self.records.into_iter().map(f).collect(),
            warnings: self.warnings,
        }
    }
}
