// src/application/queries/urls/resolve.rs
use super::UrlQueryService;
use crate::{
    application::{
        dto::UrlResolutionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::url::{BackendId, LangId, UrlKey, UrlMappingQuery, UrlScope},
};

pub struct ResolveUrlQuery {
    pub backend_id: i64,
    pub lang_id: i64,
    pub url_key: String,
}

impl UrlQueryService {
    /// Find who answers `url_key`, and where to redirect when the key is stale.
    pub async fn resolve(&self, query: ResolveUrlQuery) -> ApplicationResult<UrlResolutionDto> {
        let scope = UrlScope::new(
            BackendId::new(query.backend_id)?,
            LangId::new(query.lang_id)?,
        );
        let key = UrlKey::new(query.url_key)?;

        let mut found = self
            .read_repo
            .search(&UrlMappingQuery::new().with_key(&key).in_scope(scope))
            .await?;
        // the active mapping wins over stale ones sharing its key
        found.sort_by_key(|m| (m.redirect, std::cmp::Reverse(m.updated_at)));
        let mapping = found
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::not_found("url not found"))?;

        let canonical_key = if mapping.redirect {
            self.read_repo
                .search(
                    &UrlMappingQuery::new()
                        .owned_by(&mapping.owner)
                        .in_scope(scope)
                        .with_redirect(false),
                )
                .await?
                .into_iter()
                .next()
                .map(|m| m.url_key.into_inner())
        } else {
            None
        };

        Ok(UrlResolutionDto {
            url_key: mapping.url_key.into_inner(),
            owner: mapping.owner.to_string(),
            redirect: mapping.redirect,
            canonical_key,
        })
    }
}
