// src/domain/url/services.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::url::entity::{NewUrlMapping, UrlMapping, UrlMappingChanges};
use crate::domain::url::keyed::UrlKeyed;
use crate::domain::url::repository::{UrlMappingQuery, UrlMappingStore};
use crate::domain::url::value_objects::{OwnerRef, RecordId, UrlKey};

/// Domain service keeping persisted url mappings in line with record keys.
pub struct UrlSyncService {
    clock: Arc<dyn Clock>,
}

impl UrlSyncService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Reconcile every record of `records` flagged with `sync_required` and
    /// return the ids that were processed. Clearing the flags is left to the
    /// caller.
    pub async fn sync_urls<R: UrlKeyed>(
        &self,
        store: &mut dyn UrlMappingStore,
        records: &[R],
    ) -> DomainResult<Vec<RecordId>> {
        let mut synced = Vec::new();
        for record in records.iter().filter(|r| r.url_state().sync_required) {
            if record.url_state().active {
                let key = UrlKey::new(record.url_state().url_key.clone()).map_err(|_| {
                    DomainError::Validation(format!(
                        "{} {} has no url key to publish",
                        R::MODEL,
                        record.id()
                    ))
                })?;
                self.set_url(store, record, &key).await?;
            } else {
                tracing::debug!(model = R::MODEL, id = %record.id(), "record inactive, redirecting existing url");
                record.redirect_existing_url(store).await?;
            }
            synced.push(record.id());
        }
        Ok(synced)
    }

    /// Make `key` the active mapping of `record` and demote its other keys.
    pub async fn set_url<R: UrlKeyed>(
        &self,
        store: &mut dyn UrlMappingStore,
        record: &R,
        key: &UrlKey,
    ) -> DomainResult<UrlMapping> {
        let owner = record.owner_ref()?;
        let existing = store
            .search(
                &UrlMappingQuery::new()
                    .with_key(key)
                    .in_scope(record.url_scope()),
            )
            .await?;
        let now = self.clock.now();

        let mapping = match pick_existing(existing, &owner)? {
            Some(mut found) if found.owner != owner => {
                tracing::info!(
                    url_key = %key,
                    previous_owner = %found.owner,
                    owner = %owner,
                    "reusing redirect url"
                );
                let changes = UrlMappingChanges::new(now)
                    .with_owner(owner.clone())
                    .with_redirect(false);
                store.update(&[found.id], &changes).await?;
                found.apply(&changes);
                found
            }
            Some(mut found) => {
                if found.redirect {
                    let changes = UrlMappingChanges::new(now).with_redirect(false);
                    store.update(&[found.id], &changes).await?;
                    found.apply(&changes);
                }
                found
            }
            None => {
                tracing::debug!(url_key = %key, owner = %owner, "creating url");
                store
                    .insert(NewUrlMapping::active(
                        key.clone(),
                        owner.clone(),
                        record.url_scope(),
                        now,
                    ))
                    .await?
            }
        };

        let live = UrlMappingQuery::new().owned_by(&owner).with_redirect(false);
        let mut stale = store.search(&live.clone().without_key(key)).await?;
        // a record has one language, so the same key left live in another
        // scope is stale too
        stale.extend(
            store
                .search(&live.with_key(key))
                .await?
                .into_iter()
                .filter(|m| m.id != mapping.id),
        );
        let ids: Vec<_> = stale.iter().map(|m| m.id).collect();
        if !ids.is_empty() {
            store
                .update(&ids, &UrlMappingChanges::new(now).with_redirect(true))
                .await?;
            tracing::debug!(owner = %owner, count = ids.len(), "previous urls turned into redirects");
        }

        Ok(mapping)
    }

    /// Remove every mapping owned by `owner`, redirects included.
    pub async fn drop_urls(
        &self,
        store: &mut dyn UrlMappingStore,
        owner: &OwnerRef,
    ) -> DomainResult<u64> {
        let mappings = store
            .search(&UrlMappingQuery::new().owned_by(owner))
            .await?;
        if mappings.is_empty() {
            return Ok(0);
        }
        let ids: Vec<_> = mappings.iter().map(|m| m.id).collect();
        store.delete(&ids).await
    }
}

/// Choose which of the mappings sharing a key in one scope the record claims.
///
/// An active mapping of another owner is a conflict. Otherwise the record's
/// own mapping wins, then the most recently touched redirect of any owner.
fn pick_existing(
    candidates: Vec<UrlMapping>,
    owner: &OwnerRef,
) -> DomainResult<Option<UrlMapping>> {
    if let Some(taken) = candidates
        .iter()
        .find(|m| !m.redirect && m.owner != *owner)
    {
        return Err(DomainError::Conflict(format!(
            "url key `{}` already exists on another record\n- owner: {}\n- url mapping id: {}",
            taken.url_key, taken.owner, taken.id
        )));
    }

    let (own, others): (Vec<_>, Vec<_>) = candidates.into_iter().partition(|m| m.owner == *owner);
    if let Some(found) = own.into_iter().next() {
        return Ok(Some(found));
    }
    Ok(others
        .into_iter()
        .max_by_key(|m| (m.updated_at, m.id)))
}
