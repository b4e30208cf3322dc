// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::records::RecordCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::{settings::SettingsQueryService, urls::UrlQueryService},
    },
    domain::{
        catalog::CatalogUnitOfWork, settings::SettingsRepository,
        url::{UrlMappingReadRepository, UrlSyncService},
    },
};

pub struct ApplicationServices {
    pub record_commands: Arc<RecordCommandService>,
    pub url_queries: Arc<UrlQueryService>,
    pub settings_queries: Arc<SettingsQueryService>,
}

impl ApplicationServices {
    pub fn new(
        unit_of_work: Arc<dyn CatalogUnitOfWork>,
        url_read_repo: Arc<dyn UrlMappingReadRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let sync = Arc::new(UrlSyncService::new(Arc::clone(&clock)));

        let record_commands = Arc::new(RecordCommandService::new(
            Arc::clone(&unit_of_work),
            Arc::clone(&sync),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let url_queries = Arc::new(UrlQueryService::new(Arc::clone(&url_read_repo)));
        let settings_queries = Arc::new(SettingsQueryService::new(Arc::clone(&settings_repo)));

        Self {
            record_commands,
            url_queries,
            settings_queries,
        }
    }
}
