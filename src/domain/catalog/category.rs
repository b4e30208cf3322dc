// src/domain/catalog/category.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::catalog::repository::{CatalogRecord, CatalogTransaction, RecordStore};
use crate::domain::catalog::value_objects::RecordName;
use crate::domain::errors::DomainResult;
use crate::domain::url::{BackendId, RecordId, UrlKeyState, UrlKeyed};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: RecordId,
    pub backend: BackendId,
    pub name: RecordName,
    pub url: UrlKeyState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn from_new(id: RecordId, new: NewCategory) -> Self {
        Self {
            id,
            backend: new.backend,
            name: new.name,
            url: new.url,
            created_at: new.created_at,
            updated_at: new.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub backend: BackendId,
    pub name: RecordName,
    pub url: UrlKeyState,
    pub created_at: DateTime<Utc>,
}

impl UrlKeyed for Category {
    const MODEL: &'static str = "category";

    fn id(&self) -> RecordId {
        self.id
    }

    fn backend(&self) -> BackendId {
        self.backend
    }

    fn display_name(&self) -> &str {
        self.name.as_str()
    }

    fn url_state(&self) -> &UrlKeyState {
        &self.url
    }

    fn url_state_mut(&mut self) -> &mut UrlKeyState {
        &mut self.url
    }

    fn compute_automatic_key(&self, slugger: &dyn SlugGenerator) -> DomainResult<String> {
        Ok(slugger.slugify(self.name.as_str()))
    }
}

impl CatalogRecord for Category {
    type Draft = NewCategory;

    fn store(tx: &mut dyn CatalogTransaction) -> &mut dyn RecordStore<Self> {
        tx.categories()
    }
}
