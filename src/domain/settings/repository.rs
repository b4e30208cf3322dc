use crate::domain::errors::DomainResult;
use crate::domain::settings::entity::{SettingsCollection, SettingsEntry};
use crate::domain::url::BackendId;
use async_trait::async_trait;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn backend_exists(&self, backend: BackendId) -> DomainResult<bool>;

    /// Entries of `collection` visible to `backend`, ordered by name.
    async fn list(
        &self,
        backend: BackendId,
        collection: SettingsCollection,
    ) -> DomainResult<Vec<SettingsEntry>>;
}
