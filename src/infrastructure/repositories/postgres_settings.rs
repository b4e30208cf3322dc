// src/infrastructure/repositories/postgres_settings.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::settings::{SettingsCollection, SettingsEntry, SettingsRepository};
use crate::domain::url::BackendId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Debug, FromRow)]
struct SettingsRow {
    id: i64,
    name: String,
    code: Option<String>,
}

impl From<SettingsRow> for SettingsEntry {
    fn from(row: SettingsRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            code: row.code,
        }
    }
}

const fn list_sql(collection: SettingsCollection) -> &'static str {
    match collection {
        SettingsCollection::Countries => {
            "SELECT c.id, c.name, c.code
             FROM countries c
             JOIN backend_countries bc ON bc.country_id = c.id
             WHERE bc.backend_id = $1
             ORDER BY c.name, c.id"
        }
        SettingsCollection::Currencies => {
            "SELECT c.id, c.name, c.symbol AS code
             FROM currencies c
             JOIN backend_currencies bc ON bc.currency_id = c.id
             WHERE bc.backend_id = $1
             ORDER BY c.name, c.id"
        }
        SettingsCollection::Languages => {
            "SELECT l.id, l.name, l.code
             FROM langs l
             JOIN backend_langs bl ON bl.lang_id = l.id
             WHERE bl.backend_id = $1
             ORDER BY l.name, l.id"
        }
        SettingsCollection::Titles => {
            "SELECT id, name, shortcut AS code FROM partner_titles
             ORDER BY name, id"
        }
        SettingsCollection::Industries => {
            "SELECT id, name, full_name AS code FROM partner_industries
             ORDER BY name, id"
        }
    }
}

#[derive(Clone)]
pub struct PostgresSettingsRepository {
    pool: PgPool,
}

impl PostgresSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn backend_exists(&self, backend: BackendId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM backends WHERE id = $1)")
            .bind(i64::from(backend))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list(
        &self,
        backend: BackendId,
        collection: SettingsCollection,
    ) -> DomainResult<Vec<SettingsEntry>> {
        let mut query = sqlx::query_as::<_, SettingsRow>(list_sql(collection));
        if collection.is_backend_scoped() {
            query = query.bind(i64::from(backend));
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        tracing::debug!(
            backend_id = i64::from(backend),
            collection = %collection,
            count = rows.len(),
            "loaded settings collection"
        );
        Ok(rows.into_iter().map(SettingsEntry::from).collect())
    }
}
