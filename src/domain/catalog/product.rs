// src/domain/catalog/product.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::catalog::repository::{CatalogRecord, CatalogTransaction, RecordStore};
use crate::domain::catalog::value_objects::RecordName;
use crate::domain::errors::DomainResult;
use crate::domain::url::{BackendId, RecordId, UrlKeyState, UrlKeyed};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: RecordId,
    pub backend: BackendId,
    pub name: RecordName,
    pub default_code: Option<String>,
    pub url: UrlKeyState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn from_new(id: RecordId, new: NewProduct) -> Self {
        Self {
            id,
            backend: new.backend,
            name: new.name,
            default_code: new.default_code,
            url: new.url,
            created_at: new.created_at,
            updated_at: new.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub backend: BackendId,
    pub name: RecordName,
    pub default_code: Option<String>,
    pub url: UrlKeyState,
    pub created_at: DateTime<Utc>,
}

impl UrlKeyed for Product {
    const MODEL: &'static str = "product";

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
        let source = match self.default_code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => format!("{} {code}", self.name),
            _ => self.name.to_string(),
        };
        Ok(slugger.slugify(&source))
    }
}

impl CatalogRecord for Product {
    type Draft = NewProduct;

    fn store(tx: &mut dyn CatalogTransaction) -> &mut dyn RecordStore<Self> {
        tx.products()
    }
}
