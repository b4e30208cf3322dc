// src/application/queries/urls/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::UrlMappingDto, error::ApplicationResult},
    domain::url::{OwnerRef, UrlMappingQuery, UrlMappingReadRepository},
};

pub struct UrlQueryService {
    pub(super) read_repo: Arc<dyn UrlMappingReadRepository>,
}

impl UrlQueryService {
    pub fn new(read_repo: Arc<dyn UrlMappingReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Every mapping owned by `owner` (`model,id`), redirects included.
    pub async fn mappings_for(&self, owner: &str) -> ApplicationResult<Vec<UrlMappingDto>> {
        let owner: OwnerRef = owner.parse()?;
        self.search(UrlMappingQuery::new().owned_by(&owner)).await
    }

    /// Historical mappings of `owner` kept only to redirect old urls.
    pub async fn redirects_for(&self, owner: &str) -> ApplicationResult<Vec<UrlMappingDto>> {
        let owner: OwnerRef = owner.parse()?;
        self.search(UrlMappingQuery::new().owned_by(&owner).with_redirect(true))
            .await
    }

    async fn search(&self, query: UrlMappingQuery) -> ApplicationResult<Vec<UrlMappingDto>> {
        let mappings = self.read_repo.search(&query).await?;
        Ok(mappings.into_iter().map(UrlMappingDto::from).collect())
    }
}
