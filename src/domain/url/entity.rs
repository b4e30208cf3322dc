// src/domain/url/entity.rs
use crate::domain::url::value_objects::{OwnerRef, UrlKey, UrlMappingId, UrlScope};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: UrlMappingId,
    pub url_key: UrlKey,
    pub owner: OwnerRef,
    pub scope: UrlScope,
    pub redirect: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Apply a batch change in memory the same way the store applies it.
    pub fn apply(&mut self, changes: &UrlMappingChanges) {
        if let Some(owner) = &changes.owner {
            self.owner = owner.clone();
        }
        if let Some(redirect) = changes.redirect {
            self.redirect = redirect;
        }
        self.updated_at = changes.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub url_key: UrlKey,
    pub owner: OwnerRef,
    pub scope: UrlScope,
    pub redirect: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUrlMapping {
    pub fn active(
        url_key: UrlKey,
        owner: OwnerRef,
        scope: UrlScope,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            url_key,
            owner,
            scope,
            redirect: false,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UrlMappingChanges {
    pub owner: Option<OwnerRef>,
    pub redirect: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl UrlMappingChanges {
    pub const fn new(updated_at: DateTime<Utc>) -> Self {
        Self {
            owner: None,
            redirect: None,
            updated_at,
        }
    }

    pub fn with_owner(mut self, owner: OwnerRef) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_redirect(mut self, redirect: bool) -> Self {
        self.redirect = Some(redirect);
        self
    }
}
