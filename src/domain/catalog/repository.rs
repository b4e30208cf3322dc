// src/domain/catalog/repository.rs
use crate::domain::catalog::{Category, Product};
use crate::domain::errors::DomainResult;
use crate::domain::url::{RecordId, UrlKeyed, UrlMappingStore};
use async_trait::async_trait;

/// Record type persisted through a [`CatalogTransaction`].
pub trait CatalogRecord: UrlKeyed + Clone + Sized + 'static {
    type Draft: Send + 'static;

    fn store(tx: &mut dyn CatalogTransaction) -> &mut dyn RecordStore<Self>;

    /// Write-time constraints checked before a transaction commits.
    fn validate(&self) -> DomainResult<()> {
        self.url_state().check_manual_key()
    }
}

#[async_trait]
pub trait RecordStore<R: CatalogRecord>: Send {
    async fn insert(&mut self, draft: R::Draft) -> DomainResult<R>;
    async fn find(&mut self, id: RecordId) -> DomainResult<Option<R>>;
    /// Persist every field of `record`, derived url fields included.
    async fn update(&mut self, record: &R) -> DomainResult<()>;
    /// Lower the sync flag without touching anything else.
    async fn clear_sync_flag(&mut self, ids: &[RecordId]) -> DomainResult<()>;
    async fn delete(&mut self, id: RecordId) -> DomainResult<()>;
}

/// One database transaction spanning records and their url mappings.
/// Dropping it without `commit` discards every write.
#[async_trait]
pub trait CatalogTransaction: Send {
    fn urls(&mut self) -> &mut dyn UrlMappingStore;
    fn products(&mut self) -> &mut dyn RecordStore<Product>;
    fn categories(&mut self) -> &mut dyn RecordStore<Category>;

    async fn commit(self: Box<Self>) -> DomainResult<()>;
    async fn rollback(self: Box<Self>) -> DomainResult<()>;
}

#[async_trait]
pub trait CatalogUnitOfWork: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn CatalogTransaction>>;
}
