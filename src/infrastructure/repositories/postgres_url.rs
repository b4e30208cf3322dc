// src/infrastructure/repositories/postgres_url.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::url::{
    BackendId, LangId, NewUrlMapping, OwnerRef, RecordId, UrlKey, UrlMapping, UrlMappingChanges,
    UrlMappingId, UrlMappingQuery, UrlMappingReadRepository, UrlScope,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};

const MAPPING_COLUMNS: &str =
    "id, url_key, owner_model, owner_id, backend_id, lang_id, redirect, created_at, updated_at";

#[derive(Debug, FromRow)]
pub(super) struct UrlMappingRow {
    id: i64,
    url_key: String,
    owner_model: String,
    owner_id: i64,
    backend_id: i64,
    lang_id: i64,
    redirect: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UrlMappingRow> for UrlMapping {
    type Error = DomainError;

    fn try_from(row: UrlMappingRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UrlMappingId::new(row.id)?,
            url_key: UrlKey::new(row.url_key)?,
            owner: OwnerRef::new(row.owner_model, RecordId::new(row.owner_id)?)?,
            scope: UrlScope::new(BackendId::new(row.backend_id)?, LangId::new(row.lang_id)?),
            redirect: row.redirect,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn search_builder(query: &UrlMappingQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {MAPPING_COLUMNS} FROM url_mappings WHERE TRUE"));

    if let Some(key) = &query.url_key {
        builder.push(" AND url_key = ");
        builder.push_bind(key.as_str().to_string());
    }
    if let Some(key) = &query.url_key_not {
        builder.push(" AND url_key <> ");
        builder.push_bind(key.as_str().to_string());
    }
    if let Some(owner) = &query.owner {
        builder.push(" AND owner_model = ");
        builder.push_bind(owner.model().to_string());
        builder.push(" AND owner_id = ");
        builder.push_bind(i64::from(owner.id()));
    }
    if let Some(scope) = query.scope {
        builder.push(" AND backend_id = ");
        builder.push_bind(i64::from(scope.backend));
        builder.push(" AND lang_id = ");
        builder.push_bind(i64::from(scope.lang));
    }
    if let Some(redirect) = query.redirect {
        builder.push(" AND redirect = ");
        builder.push_bind(redirect);
    }
    builder.push(" ORDER BY id");
    builder
}

fn into_mappings(rows: Vec<UrlMappingRow>) -> DomainResult<Vec<UrlMapping>> {
    rows.into_iter().map(UrlMapping::try_from).collect()
}

pub(super) async fn search(
    conn: &mut PgConnection,
    query: &UrlMappingQuery,
) -> DomainResult<Vec<UrlMapping>> {
    let rows = search_builder(query)
        .build_query_as::<UrlMappingRow>()
        .fetch_all(conn)
        .await
        .map_err(map_sqlx)?;
    into_mappings(rows)
}

pub(super) async fn insert(
    conn: &mut PgConnection,
    mapping: NewUrlMapping,
) -> DomainResult<UrlMapping> {
    let NewUrlMapping {
        url_key,
        owner,
        scope,
        redirect,
        created_at,
    } = mapping;

    let row = sqlx::query_as::<_, UrlMappingRow>(&format!(
        "INSERT INTO url_mappings (url_key, owner_model, owner_id, backend_id, lang_id, redirect, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
         RETURNING {MAPPING_COLUMNS}"
    ))
    .bind(url_key.as_str())
    .bind(owner.model())
    .bind(i64::from(owner.id()))
    .bind(i64::from(scope.backend))
    .bind(i64::from(scope.lang))
    .bind(redirect)
    .bind(created_at)
    .fetch_one(conn)
    .await
    .map_err(map_sqlx)?;

    UrlMapping::try_from(row)
}

pub(super) async fn update(
    conn: &mut PgConnection,
    ids: &[UrlMappingId],
    changes: &UrlMappingChanges,
) -> DomainResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE url_mappings SET updated_at = ");
    builder.push_bind(changes.updated_at);
    if let Some(owner) = &changes.owner {
        builder.push(", owner_model = ");
        builder.push_bind(owner.model().to_string());
        builder.push(", owner_id = ");
        builder.push_bind(i64::from(owner.id()));
    }
    if let Some(redirect) = changes.redirect {
        builder.push(", redirect = ");
        builder.push_bind(redirect);
    }
    builder.push(" WHERE id = ANY(");
    builder.push_bind(ids.iter().map(|id| i64::from(*id)).collect::<Vec<_>>());
    builder.push(")");

    let result = builder.build().execute(conn).await.map_err(map_sqlx)?;
    Ok(result.rows_affected())
}

pub(super) async fn delete(conn: &mut PgConnection, ids: &[UrlMappingId]) -> DomainResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let ids: Vec<i64> = ids.iter().map(|id| i64::from(*id)).collect();
    let result = sqlx::query("DELETE FROM url_mappings WHERE id = ANY($1)")
        .bind(ids)
        .execute(conn)
        .await
        .map_err(map_sqlx)?;
    Ok(result.rows_affected())
}

#[derive(Clone)]
pub struct PostgresUrlMappingReadRepository {
    pool: PgPool,
}

impl PostgresUrlMappingReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlMappingReadRepository for PostgresUrlMappingReadRepository {
    async fn search(&self, query: &UrlMappingQuery) -> DomainResult<Vec<UrlMapping>> {
        let rows = search_builder(query)
            .build_query_as::<UrlMappingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        into_mappings(rows)
    }
}
