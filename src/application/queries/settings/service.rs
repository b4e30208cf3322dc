// src/application/queries/settings/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{SettingsDto, SettingsEntryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        settings::{SettingsCollection, SettingsRepository},
        url::BackendId,
    },
};

/// Name accepted by [`SettingsQueryService::dispatch`] for every collection at once.
pub const GET_ALL: &str = "get_all";

/// Read-only catalog lookups for a storefront backend.
pub struct SettingsQueryService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsQueryService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    pub async fn countries(&self, backend_id: i64) -> ApplicationResult<SettingsDto> {
        self.collections(backend_id, &[SettingsCollection::Countries])
            .await
    }

    pub async fn titles(&self, backend_id: i64) -> ApplicationResult<SettingsDto> {
        self.collections(backend_id, &[SettingsCollection::Titles]).await
    }

    pub async fn industries(&self, backend_id: i64) -> ApplicationResult<SettingsDto> {
        self.collections(backend_id, &[SettingsCollection::Industries])
            .await
    }

    pub async fn currencies(&self, backend_id: i64) -> ApplicationResult<SettingsDto> {
        self.collections(backend_id, &[SettingsCollection::Currencies])
            .await
    }

    pub async fn languages(&self, backend_id: i64) -> ApplicationResult<SettingsDto> {
        self.collections(backend_id, &[SettingsCollection::Languages])
            .await
    }

    pub async fn get_all(&self, backend_id: i64) -> ApplicationResult<SettingsDto> {
        self.collections(backend_id, &SettingsCollection::ALL).await
    }

    /// Resolve a lookup by its public name, e.g. `countries` or `get_all`.
    pub async fn dispatch(&self, backend_id: i64, name: &str) -> ApplicationResult<SettingsDto> {
        if name == GET_ALL {
            return self.get_all(backend_id).await;
        }
        let collection: SettingsCollection = name
            .parse()
            .map_err(|_| ApplicationError::not_found(format!("unknown settings: {name}")))?;
        self.collections(backend_id, &[collection]).await
    }

    async fn collections(
        &self,
        backend_id: i64,
        collections: &[SettingsCollection],
    ) -> ApplicationResult<SettingsDto> {
        let backend = BackendId::new(backend_id)?;
        if !self.repo.backend_exists(backend).await? {
            return Err(ApplicationError::not_found("backend not found"));
        }

        let mut settings = SettingsDto::default();
        for collection in collections {
            let entries = self.repo.list(backend, *collection).await?;
            settings.collections.insert(
                collection.as_str().to_string(),
                entries.into_iter().map(SettingsEntryDto::from).collect(),
            );
        }
        Ok(settings)
    }
}
