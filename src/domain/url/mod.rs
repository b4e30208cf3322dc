pub mod entity;
pub mod keyed;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewUrlMapping, UrlMapping, UrlMappingChanges};
pub use keyed::{NormalizationAdvisory, UrlKeyState, UrlKeyed, refresh_url_key};
pub use repository::{UrlMappingQuery, UrlMappingReadRepository, UrlMappingStore};
pub use services::UrlSyncService;
pub use value_objects::{
    BackendId, LangId, OwnerRef, RecordId, UrlBuilderMode, UrlKey, UrlMappingId, UrlScope,
};
