// src/application/commands/records/create.rs
use super::{RecordCommandService, service::finish};
use crate::{
    application::error::ApplicationResult,
    domain::{
        catalog::{CatalogRecord, CatalogTransaction},
        errors::DomainResult,
        url::refresh_url_key,
    },
};

impl RecordCommandService {
    pub async fn create<R: CatalogRecord>(&self, draft: R::Draft) -> ApplicationResult<R> {
        let mut tx = self.unit_of_work.begin().await?;
        let result = self.create_in(tx.as_mut(), draft).await;
        finish(tx, result).await
    }

    async fn create_in<R: CatalogRecord>(
        &self,
        tx: &mut dyn CatalogTransaction,
        draft: R::Draft,
    ) -> DomainResult<R> {
        let mut record = R::store(tx).insert(draft).await?;
        record.validate()?;
        refresh_url_key(&mut record, self.slugger.as_ref())?;
        // a new record always gets its urls reconciled, even with an empty key
        record.url_state_mut().require_sync();
        R::store(tx).update(&record).await?;

        let synced = self
            .sync
            .sync_urls(tx.urls(), std::slice::from_ref(&record))
            .await?;
        R::store(tx).clear_sync_flag(&synced).await?;
        record.url_state_mut().mark_synced();

        tracing::info!(model = R::MODEL, id = %record.id(), url_key = %record.url_state().url_key, "record created");
        Ok(record)
    }
}
