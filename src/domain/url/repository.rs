// src/domain/url/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::url::entity::{NewUrlMapping, UrlMapping, UrlMappingChanges};
use crate::domain::url::value_objects::{OwnerRef, UrlKey, UrlMappingId, UrlScope};
use async_trait::async_trait;

/// Conjunction of predicates over url mappings. Unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlMappingQuery {
    pub url_key: Option<UrlKey>,
    pub url_key_not: Option<UrlKey>,
    pub owner: Option<OwnerRef>,
    pub scope: Option<UrlScope>,
    pub redirect: Option<bool>,
}

impl UrlMappingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: &UrlKey) -> Self {
        self.url_key = Some(key.clone());
        self
    }

    pub fn without_key(mut self, key: &UrlKey) -> Self {
        self.url_key_not = Some(key.clone());
        self
    }

    pub fn owned_by(mut self, owner: &OwnerRef) -> Self {
        self.owner = Some(owner.clone());
        self
    }

    pub const fn in_scope(mut self, scope: UrlScope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub const fn with_redirect(mut self, redirect: bool) -> Self {
        self.redirect = Some(redirect);
        self
    }

    pub fn matches(&self, mapping: &UrlMapping) -> bool {
        self.url_key.as_ref().is_none_or(|key| *key == mapping.url_key)
            && self
                .url_key_not
                .as_ref()
                .is_none_or(|key| *key != mapping.url_key)
            && self.owner.as_ref().is_none_or(|owner| *owner == mapping.owner)
            && self.scope.is_none_or(|scope| scope == mapping.scope)
            && self.redirect.is_none_or(|redirect| redirect == mapping.redirect)
    }
}

/// Mapping access inside a unit of work. Every call sees the writes made
/// earlier through the same store.
#[async_trait]
pub trait UrlMappingStore: Send {
    async fn search(&mut self, query: &UrlMappingQuery) -> DomainResult<Vec<UrlMapping>>;
    async fn insert(&mut self, mapping: NewUrlMapping) -> DomainResult<UrlMapping>;
    async fn update(
        &mut self,
        ids: &[UrlMappingId],
        changes: &UrlMappingChanges,
    ) -> DomainResult<u64>;
    async fn delete(&mut self, ids: &[UrlMappingId]) -> DomainResult<u64>;
}

#[async_trait]
pub trait UrlMappingReadRepository: Send + Sync {
    async fn search(&self, query: &UrlMappingQuery) -> DomainResult<Vec<UrlMapping>>;
}
