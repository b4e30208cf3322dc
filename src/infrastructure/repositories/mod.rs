// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_catalog;
mod postgres_settings;
mod postgres_url;

pub use error::map_sqlx;
pub use postgres_catalog::{PostgresCatalogTransaction, PostgresCatalogUnitOfWork};
pub use postgres_settings::PostgresSettingsRepository;
pub use postgres_url::PostgresUrlMappingReadRepository;
