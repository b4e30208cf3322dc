// tests/support/mocks/memory.rs
//! トランザクション付きインメモリカタログ
use async_trait::async_trait;
use base_url::domain::catalog::{
    CatalogTransaction, CatalogUnitOfWork, Category, NewCategory, NewProduct, Product,
    RecordStore,
};
use base_url::domain::errors::{DomainError, DomainResult};
use base_url::domain::url::{
    BackendId, LangId, NewUrlMapping, OwnerRef, RecordId, UrlKey, UrlMapping, UrlMappingChanges,
    UrlMappingId, UrlMappingQuery, UrlMappingReadRepository, UrlMappingStore, UrlScope,
};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

pub const KNOWN_BACKEND: i64 = 1;
pub const KNOWN_LANGS: [i64; 2] = [1, 2];

#[derive(Debug, Clone, Default)]
struct CatalogState {
    mappings: Vec<UrlMapping>,
    products: BTreeMap<RecordId, Product>,
    categories: BTreeMap<RecordId, Category>,
    next_mapping_id: i64,
    next_record_id: i64,
}

impl CatalogState {
    fn check_references(backend: BackendId, lang: LangId) -> DomainResult<()> {
        if i64::from(backend) != KNOWN_BACKEND {
            return Err(DomainError::NotFound("backend not found".into()));
        }
        if !KNOWN_LANGS.contains(&i64::from(lang)) {
            return Err(DomainError::NotFound("language not found".into()));
        }
        Ok(())
    }

    /// Same guarantee as the partial unique index on active keys.
    fn check_active_keys(&self) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for mapping in self.mappings.iter().filter(|m| !m.redirect) {
            let slot = (mapping.scope, mapping.url_key.as_str().to_string());
            if !seen.insert(slot) {
                return Err(DomainError::Conflict(format!(
                    "url key `{}` already exists on another record",
                    mapping.url_key
                )));
            }
        }
        Ok(())
    }

    fn next_record_id(&mut self) -> RecordId {
        self.next_record_id += 1;
        RecordId(self.next_record_id)
    }

    fn push_mapping(&mut self, mapping: NewUrlMapping, updated_at: DateTime<Utc>) -> UrlMapping {
        self.next_mapping_id += 1;
        let stored = UrlMapping {
            id: UrlMappingId(self.next_mapping_id),
            url_key: mapping.url_key,
            owner: mapping.owner,
            scope: mapping.scope,
            redirect: mapping.redirect,
            created_at: mapping.created_at,
            updated_at,
        };
        self.mappings.push(stored.clone());
        stored
    }
}

/// Unit of work backed by a shared snapshot. A transaction works on a copy
/// and publishes it on commit.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> CatalogState {
        self.state.lock().unwrap().clone()
    }

    pub fn mappings(&self) -> Vec<UrlMapping> {
        self.snapshot().mappings
    }

    pub fn mappings_of(&self, owner: &str) -> Vec<UrlMapping> {
        let owner: OwnerRef = owner.parse().unwrap();
        self.mappings()
            .into_iter()
            .filter(|m| m.owner == owner)
            .collect()
    }

    pub fn active_keys_of(&self, owner: &str) -> Vec<String> {
        self.mappings_of(owner)
            .into_iter()
            .filter(|m| !m.redirect)
            .map(|m| m.url_key.into_inner())
            .collect()
    }

    pub fn product(&self, id: i64) -> Option<Product> {
        self.snapshot().products.get(&RecordId(id)).cloned()
    }

    pub fn category(&self, id: i64) -> Option<Category> {
        self.snapshot().categories.get(&RecordId(id)).cloned()
    }

    /// Store a mapping directly, bypassing the sync engine.
    pub fn seed_mapping(
        &self,
        key: &str,
        owner: &str,
        scope: UrlScope,
        redirect: bool,
        updated_at: DateTime<Utc>,
    ) -> UrlMapping {
        let mapping = NewUrlMapping {
            url_key: UrlKey::new(key).unwrap(),
            owner: owner.parse().unwrap(),
            scope,
            redirect,
            created_at: updated_at,
        };
        self.state.lock().unwrap().push_mapping(mapping, updated_at)
    }

    /// Open a transaction directly, for driving the sync engine in tests.
    pub fn transaction(&self) -> InMemoryTransaction {
        InMemoryTransaction {
            shared: Arc::clone(&self.state),
            working: self.snapshot(),
        }
    }
}

#[async_trait]
impl CatalogUnitOfWork for InMemoryCatalog {
    async fn begin(&self) -> DomainResult<Box<dyn CatalogTransaction>> {
        Ok(Box::new(self.transaction()))
    }
}

#[async_trait]
impl UrlMappingReadRepository for InMemoryCatalog {
    async fn search(&self, query: &UrlMappingQuery) -> DomainResult<Vec<UrlMapping>> {
        Ok(self
            .mappings()
            .into_iter()
            .filter(|m| query.matches(m))
            .collect())
    }
}

pub struct InMemoryTransaction {
    shared: Arc<Mutex<CatalogState>>,
    working: CatalogState,
}

impl InMemoryTransaction {
    pub fn commit_now(self) {
        *self.shared.lock().unwrap() = self.working;
    }
}

#[async_trait]
impl UrlMappingStore for InMemoryTransaction {
    async fn search(&mut self, query: &UrlMappingQuery) -> DomainResult<Vec<UrlMapping>> {
        Ok(self
            .working
            .mappings
            .iter()
            .filter(|m| query.matches(m))
            .cloned()
            .collect())
    }

    async fn insert(&mut self, mapping: NewUrlMapping) -> DomainResult<UrlMapping> {
        CatalogState::check_references(mapping.scope.backend, mapping.scope.lang)?;
        let updated_at = mapping.created_at;
        let stored = self.working.push_mapping(mapping, updated_at);
        if let Err(err) = self.working.check_active_keys() {
            self.working.mappings.pop();
            return Err(err);
        }
        Ok(stored)
    }

    async fn update(
        &mut self,
        ids: &[UrlMappingId],
        changes: &UrlMappingChanges,
    ) -> DomainResult<u64> {
        let before = self.working.mappings.clone();
        let mut count = 0;
        for mapping in self
            .working
            .mappings
            .iter_mut()
            .filter(|m| ids.contains(&m.id))
        {
            mapping.apply(changes);
            count += 1;
        }
        if let Err(err) = self.working.check_active_keys() {
            self.working.mappings = before;
            return Err(err);
        }
        Ok(count)
    }

    async fn delete(&mut self, ids: &[UrlMappingId]) -> DomainResult<u64> {
        let before = self.working.mappings.len();
        self.working.mappings.retain(|m| !ids.contains(&m.id));
        Ok((before - self.working.mappings.len()) as u64)
    }
}

#[async_trait]
impl RecordStore<Product> for InMemoryTransaction {
    async fn insert(&mut self, draft: NewProduct) -> DomainResult<Product> {
        CatalogState::check_references(draft.backend, draft.url.lang)?;
        let id = self.working.next_record_id();
        let product = Product::from_new(id, draft);
        self.working.products.insert(id, product.clone());
        Ok(product)
    }

    async fn find(&mut self, id: RecordId) -> DomainResult<Option<Product>> {
        Ok(self.working.products.get(&id).cloned())
    }

    async fn update(&mut self, product: &Product) -> DomainResult<()> {
        CatalogState::check_references(product.backend, product.url.lang)?;
        match self.working.products.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound("product not found".into())),
        }
    }

    async fn clear_sync_flag(&mut self, ids: &[RecordId]) -> DomainResult<()> {
        for id in ids {
            if let Some(product) = self.working.products.get_mut(id) {
                product.url.mark_synced();
            }
        }
        Ok(())
    }

    async fn delete(&mut self, id: RecordId) -> DomainResult<()> {
        self.working
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("product not found".into()))
    }
}

#[async_trait]
impl RecordStore<Category> for InMemoryTransaction {
    async fn insert(&mut self, draft: NewCategory) -> DomainResult<Category> {
        CatalogState::check_references(draft.backend, draft.url.lang)?;
        let id = self.working.next_record_id();
        let category = Category::from_new(id, draft);
        self.working.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn find(&mut self, id: RecordId) -> DomainResult<Option<Category>> {
        Ok(self.working.categories.get(&id).cloned())
    }

    async fn update(&mut self, category: &Category) -> DomainResult<()> {
        CatalogState::check_references(category.backend, category.url.lang)?;
        match self.working.categories.get_mut(&category.id) {
            Some(stored) => {
                *stored = category.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound("category not found".into())),
        }
    }

    async fn clear_sync_flag(&mut self, ids: &[RecordId]) -> DomainResult<()> {
        for id in ids {
            if let Some(category) = self.working.categories.get_mut(id) {
                category.url.mark_synced();
            }
        }
        Ok(())
    }

    async fn delete(&mut self, id: RecordId) -> DomainResult<()> {
        self.working
            .categories
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }
}

#[async_trait]
impl CatalogTransaction for InMemoryTransaction {
    fn urls(&mut self) -> &mut dyn UrlMappingStore {
        self
    }

    fn products(&mut self) -> &mut dyn RecordStore<Product> {
        self
    }

    fn categories(&mut self) -> &mut dyn RecordStore<Category> {
        self
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.commit_now();
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        Ok(())
    }
}
