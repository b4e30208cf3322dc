// src/application/commands/records/unlink.rs
use super::{RecordCommandService, service::finish};
use crate::{
    application::error::ApplicationResult,
    domain::{
        catalog::{CatalogRecord, CatalogTransaction},
        errors::{DomainError, DomainResult},
        url::{OwnerRef, RecordId},
    },
};

impl RecordCommandService {
    /// Delete records together with every url mapping they own.
    pub async fn unlink<R: CatalogRecord>(&self, ids: &[RecordId]) -> ApplicationResult<()> {
        let mut tx = self.unit_of_work.begin().await?;
        let result = self.unlink_in::<R>(tx.as_mut(), ids).await;
        finish(tx, result).await
    }

    async fn unlink_in<R: CatalogRecord>(
        &self,
        tx: &mut dyn CatalogTransaction,
        ids: &[RecordId],
    ) -> DomainResult<()> {
        for id in ids {
            if R::store(tx).find(*id).await?.is_none() {
                return Err(DomainError::NotFound(format!("{} {id} not found", R::MODEL)));
            }
            let owner = OwnerRef::new(R::MODEL, *id)?;
            let removed = self.sync.drop_urls(tx.urls(), &owner).await?;
            R::store(tx).delete(*id).await?;
            tracing::info!(owner = %owner, removed_urls = removed, "record deleted");
        }
        Ok(())
    }
}
