// src/domain/url/keyed.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::url::repository::UrlMappingStore;
use crate::domain::url::value_objects::{
    BackendId, LangId, OwnerRef, RecordId, UrlBuilderMode, UrlScope,
};
use async_trait::async_trait;

/// Non-blocking notice returned when a manual key had to be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationAdvisory {
    pub title: String,
    pub message: String,
    pub adapted_key: String,
}

impl NormalizationAdvisory {
    fn adapted_to(slug: &str) -> Self {
        Self {
            title: "Adapt text rules".into(),
            message: format!("it will be adapted to {slug}"),
            adapted_key: slug.to_string(),
        }
    }
}

/// Url key fields carried by every record that owns url mappings.
///
/// `url_key` is the stored effective key; it is only changed through
/// [`UrlKeyState::refresh`], which raises `sync_required` whenever the value
/// moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlKeyState {
    pub builder: UrlBuilderMode,
    pub automatic_key: String,
    pub manual_key: Option<String>,
    pub url_key: String,
    pub lang: LangId,
    pub active: bool,
    pub sync_required: bool,
}

impl UrlKeyState {
    pub const fn new(lang: LangId) -> Self {
        Self {
            builder: UrlBuilderMode::Automatic,
            automatic_key: String::new(),
            manual_key: None,
            url_key: String::new(),
            lang,
            active: true,
            sync_required: false,
        }
    }

    /// Key the record should be reachable under right now.
    pub fn effective_key(&self) -> &str {
        if !self.active {
            return "";
        }
        match self.builder {
            UrlBuilderMode::Manual => self.manual_key.as_deref().unwrap_or(""),
            UrlBuilderMode::Automatic => &self.automatic_key,
        }
    }

    /// Store a user supplied key in slug form.
    pub fn set_manual_key(
        &mut self,
        input: &str,
        slugger: &dyn SlugGenerator,
    ) -> Option<NormalizationAdvisory> {
        if input.is_empty() {
            self.manual_key = None;
            return None;
        }
        let slug = slugger.slugify(input);
        let advisory = (slug != input).then(|| NormalizationAdvisory::adapted_to(&slug));
        self.manual_key = if slug.is_empty() { None } else { Some(slug) };
        advisory
    }

    pub fn check_manual_key(&self) -> DomainResult<()> {
        let missing = self.manual_key.as_deref().is_none_or(str::is_empty);
        if self.builder == UrlBuilderMode::Manual && missing {
            return Err(DomainError::Validation(
                "manual url key is required if builder is set to manual".into(),
            ));
        }
        Ok(())
    }

    /// Recompute the stored key from a freshly derived automatic key.
    /// Returns whether the effective key changed.
    pub fn refresh(&mut self, automatic_key: String) -> bool {
        self.automatic_key = automatic_key;
        let effective = self.effective_key().to_string();
        if effective == self.url_key {
            return false;
        }
        self.url_key = effective;
        self.sync_required = true;
        true
    }

    pub const fn require_sync(&mut self) {
        self.sync_required = true;
    }

    pub const fn mark_synced(&mut self) {
        self.sync_required = false;
    }
}

/// Capability of a record type whose instances are published under url keys.
#[async_trait]
pub trait UrlKeyed: Send + Sync {
    /// Model name used in owner references (`model,id`).
    const MODEL: &'static str;

    fn id(&self) -> RecordId;
    fn backend(&self) -> BackendId;
    fn display_name(&self) -> &str;
    fn url_state(&self) -> &UrlKeyState;
    fn url_state_mut(&mut self) -> &mut UrlKeyState;

    /// Derive the automatic key from record content. Record types must
    /// override this; the provided body only reports the missing override.
    fn compute_automatic_key(&self, _slugger: &dyn SlugGenerator) -> DomainResult<String> {
        Err(DomainError::Unimplemented(format!(
            "automatic url key must be computed by `{}`",
            Self::MODEL
        )))
    }

    /// Called instead of `set_url` when the record was deactivated.
    async fn redirect_existing_url(&self, _store: &mut dyn UrlMappingStore) -> DomainResult<()> {
        Ok(())
    }

    fn owner_ref(&self) -> DomainResult<OwnerRef> {
        OwnerRef::new(Self::MODEL, self.id())
    }

    fn url_scope(&self) -> UrlScope {
        UrlScope::new(self.backend(), self.url_state().lang)
    }
}

/// Recompute derived url fields of `record`. Returns whether a sync is now due.
pub fn refresh_url_key<R: UrlKeyed>(
    record: &mut R,
    slugger: &dyn SlugGenerator,
) -> DomainResult<bool> {
    let automatic = record.compute_automatic_key(slugger)?;
    Ok(record.url_state_mut().refresh(automatic))
}
