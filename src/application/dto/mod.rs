pub mod catalog;
pub mod settings;
pub mod urls;

pub use catalog::{AdvisoryDto, CategoryDto, ProductDto, RecordOutcome, UrlBuilderModeDto, UrlFieldsDto};
pub use settings::{SettingsDto, SettingsEntryDto};
pub use urls::{UrlMappingDto, UrlResolutionDto};
