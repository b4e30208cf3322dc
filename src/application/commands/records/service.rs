// src/application/commands/records/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::{
        catalog::{CatalogTransaction, CatalogUnitOfWork},
        errors::DomainResult,
        url::UrlSyncService,
    },
};

/// Write path of url keyed records: every command persists the records and
/// reconciles their url mappings inside one transaction.
pub struct RecordCommandService {
    pub(super) unit_of_work: Arc<dyn CatalogUnitOfWork>,
    pub(super) sync: Arc<UrlSyncService>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RecordCommandService {
    pub fn new(
        unit_of_work: Arc<dyn CatalogUnitOfWork>,
        sync: Arc<UrlSyncService>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            unit_of_work,
            sync,
            slugger,
            clock,
        }
    }
}

/// Commit when every step succeeded, roll back otherwise.
pub(super) async fn finish<T>(
    tx: Box<dyn CatalogTransaction>,
    result: DomainResult<T>,
) -> ApplicationResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            Err(err.into())
        }
    }
}
