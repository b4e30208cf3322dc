// src/infrastructure/repositories/postgres_catalog.rs
use super::{map_sqlx, postgres_url};
use crate::domain::catalog::{
    CatalogTransaction, CatalogUnitOfWork, Category, NewCategory, NewProduct, Product, RecordName,
    RecordStore,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::url::{
    BackendId, LangId, NewUrlMapping, RecordId, UrlKeyState, UrlMapping, UrlMappingChanges,
    UrlMappingId, UrlMappingQuery, UrlMappingStore,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};

const PRODUCT_COLUMNS: &str = "id, backend_id, name, default_code, url_builder, automatic_url_key, \
     manual_url_key, url_key, lang_id, active, is_urls_sync_required, created_at, updated_at";
const CATEGORY_COLUMNS: &str = "id, backend_id, name, url_builder, automatic_url_key, \
     manual_url_key, url_key, lang_id, active, is_urls_sync_required, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCatalogUnitOfWork {
    pool: PgPool,
}

impl PostgresCatalogUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogUnitOfWork for PostgresCatalogUnitOfWork {
    async fn begin(&self) -> DomainResult<Box<dyn CatalogTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresCatalogTransaction { tx }))
    }
}

pub struct PostgresCatalogTransaction {
    tx: Transaction<'static, Postgres>,
}

#[derive(Debug, FromRow)]
struct UrlColumns {
    url_builder: String,
    automatic_url_key: String,
    manual_url_key: Option<String>,
    url_key: String,
    lang_id: i64,
    active: bool,
    is_urls_sync_required: bool,
}

impl TryFrom<UrlColumns> for UrlKeyState {
    type Error = DomainError;

    fn try_from(columns: UrlColumns) -> Result<Self, Self::Error> {
        let mut url = Self::new(LangId::new(columns.lang_id)?);
        url.builder = columns.url_builder.parse()?;
        url.automatic_key = columns.automatic_url_key;
        url.manual_key = columns.manual_url_key;
        url.url_key = columns.url_key;
        url.active = columns.active;
        url.sync_required = columns.is_urls_sync_required;
        Ok(url)
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    backend_id: i64,
    name: String,
    default_code: Option<String>,
    #[sqlx(flatten)]
    url: UrlColumns,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(row.id)?,
            backend: BackendId::new(row.backend_id)?,
            name: RecordName::new(row.name)?,
            default_code: row.default_code,
            url: UrlKeyState::try_from(row.url)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    backend_id: i64,
    name: String,
    #[sqlx(flatten)]
    url: UrlColumns,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(row.id)?,
            backend: BackendId::new(row.backend_id)?,
            name: RecordName::new(row.name)?,
            url: UrlKeyState::try_from(row.url)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn record_ids(ids: &[RecordId]) -> Vec<i64> {
    ids.iter().map(|id| i64::from(*id)).collect()
}

#[async_trait]
impl UrlMappingStore for PostgresCatalogTransaction {
    async fn search(&mut self, query: &UrlMappingQuery) -> DomainResult<Vec<UrlMapping>> {
        postgres_url::search(&mut self.tx, query).await
    }

    async fn insert(&mut self, mapping: NewUrlMapping) -> DomainResult<UrlMapping> {
        postgres_url::insert(&mut self.tx, mapping).await
    }

    async fn update(
        &mut self,
        ids: &[UrlMappingId],
        changes: &UrlMappingChanges,
    ) -> DomainResult<u64> {
        postgres_url::update(&mut self.tx, ids, changes).await
    }

    async fn delete(&mut self, ids: &[UrlMappingId]) -> DomainResult<u64> {
        postgres_url::delete(&mut self.tx, ids).await
    }
}

#[async_trait]
impl RecordStore<Product> for PostgresCatalogTransaction {
    async fn insert(&mut self, draft: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            backend,
            name,
            default_code,
            url,
            created_at,
        } = draft;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products (backend_id, name, default_code, url_builder, manual_url_key, lang_id, active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(i64::from(backend))
        .bind(name.as_str())
        .bind(default_code)
        .bind(url.builder.as_str())
        .bind(url.manual_key)
        .bind(i64::from(url.lang))
        .bind(url.active)
        .bind(created_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn find(&mut self, id: RecordId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 FOR UPDATE"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn update(&mut self, product: &Product) -> DomainResult<()> {
        let url = &product.url;
        let result = sqlx::query(
            "UPDATE products SET name = $1, default_code = $2, url_builder = $3, automatic_url_key = $4,
             manual_url_key = $5, url_key = $6, lang_id = $7, active = $8, is_urls_sync_required = $9,
             updated_at = $10
             WHERE id = $11",
        )
        .bind(product.name.as_str())
        .bind(product.default_code.as_deref())
        .bind(url.builder.as_str())
        .bind(url.automatic_key.as_str())
        .bind(url.manual_key.as_deref())
        .bind(url.url_key.as_str())
        .bind(i64::from(url.lang))
        .bind(url.active)
        .bind(url.sync_required)
        .bind(product.updated_at)
        .bind(i64::from(product.id))
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }

    async fn clear_sync_flag(&mut self, ids: &[RecordId]) -> DomainResult<()> {
        sqlx::query("UPDATE products SET is_urls_sync_required = FALSE WHERE id = ANY($1)")
            .bind(record_ids(ids))
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete(&mut self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore<Category> for PostgresCatalogTransaction {
    async fn insert(&mut self, draft: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            backend,
            name,
            url,
            created_at,
        } = draft;

        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "INSERT INTO categories (backend_id, name, url_builder, manual_url_key, lang_id, active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(i64::from(backend))
        .bind(name.as_str())
        .bind(url.builder.as_str())
        .bind(url.manual_key)
        .bind(i64::from(url.lang))
        .bind(url.active)
        .bind(created_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn find(&mut self, id: RecordId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1 FOR UPDATE"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn update(&mut self, category: &Category) -> DomainResult<()> {
        let url = &category.url;
        let result = sqlx::query(
            "UPDATE categories SET name = $1, url_builder = $2, automatic_url_key = $3,
             manual_url_key = $4, url_key = $5, lang_id = $6, active = $7, is_urls_sync_required = $8,
             updated_at = $9
             WHERE id = $10",
        )
        .bind(category.name.as_str())
        .bind(url.builder.as_str())
        .bind(url.automatic_key.as_str())
        .bind(url.manual_key.as_deref())
        .bind(url.url_key.as_str())
        .bind(i64::from(url.lang))
        .bind(url.active)
        .bind(url.sync_required)
        .bind(category.updated_at)
        .bind(i64::from(category.id))
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn clear_sync_flag(&mut self, ids: &[RecordId]) -> DomainResult<()> {
        sqlx::query("UPDATE categories SET is_urls_sync_required = FALSE WHERE id = ANY($1)")
            .bind(record_ids(ids))
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete(&mut self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogTransaction for PostgresCatalogTransaction {
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
        self.tx.commit().await.map_err(map_sqlx)
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        self.tx.rollback().await.map_err(map_sqlx)
    }
}
