// src/application/commands/records/write.rs
use super::{RecordCommandService, service::finish};
use crate::{
    application::{error::ApplicationResult, ports::util::SlugGenerator},
    domain::{
        catalog::{CatalogRecord, CatalogTransaction},
        errors::{DomainError, DomainResult},
        url::{NormalizationAdvisory, RecordId, refresh_url_key},
    },
};

#[derive(Debug, Clone)]
pub struct WriteOutcome<R> {
    pub records: Vec<R>,
    pub advisories: Vec<NormalizationAdvisory>,
}

impl RecordCommandService {
    /// Apply `change` to every record of `ids`, persist them and reconcile the
    /// urls of those whose effective key moved.
    pub async fn write<R, F>(&self, ids: &[RecordId], change: F) -> ApplicationResult<WriteOutcome<R>>
    where
        R: CatalogRecord,
        F: Fn(&mut R, &dyn SlugGenerator) -> DomainResult<Vec<NormalizationAdvisory>> + Send + Sync,
    {
        let mut tx = self.unit_of_work.begin().await?;
        let result = self.write_in(tx.as_mut(), ids, &change).await;
        finish(tx, result).await
    }

    async fn write_in<R, F>(
        &self,
        tx: &mut dyn CatalogTransaction,
        ids: &[RecordId],
        change: &F,
    ) -> DomainResult<WriteOutcome<R>>
    where
        R: CatalogRecord,
        F: Fn(&mut R, &dyn SlugGenerator) -> DomainResult<Vec<NormalizationAdvisory>> + Send + Sync,
    {
        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            let record = R::store(tx)
                .find(*id)
                .await?
                .ok_or_else(|| DomainError::NotFound(format!("{} {id} not found", R::MODEL)))?;
            records.push(record);
        }

        let slugger = self.slugger.as_ref();
        let mut advisories = Vec::new();
        for record in &mut records {
            advisories.extend(change(&mut *record, slugger)?);
            record.validate()?;
            refresh_url_key(record, slugger)?;
            R::store(tx).update(record).await?;
        }

        let synced = self.sync.sync_urls(tx.urls(), &records).await?;
        if !synced.is_empty() {
            R::store(tx).clear_sync_flag(&synced).await?;
            for record in records.iter_mut().filter(|r| synced.contains(&r.id())) {
                record.url_state_mut().mark_synced();
            }
            tracing::info!(model = R::MODEL, count = synced.len(), "record urls synchronized");
        }

        Ok(WriteOutcome {
            records,
            advisories,
        })
    }
}
