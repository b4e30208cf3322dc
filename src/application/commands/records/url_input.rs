// src/application/commands/records/url_input.rs
use crate::{
    application::ports::util::SlugGenerator,
    domain::{
        errors::DomainResult,
        url::{LangId, NormalizationAdvisory, UrlBuilderMode, UrlKeyState},
    },
};

/// Url related fields a caller may change on any url keyed record.
#[derive(Debug, Clone, Default)]
pub struct UrlKeyInput {
    pub url_builder: Option<UrlBuilderMode>,
    pub manual_url_key: Option<String>,
    pub lang_id: Option<i64>,
    pub active: Option<bool>,
}

impl UrlKeyInput {
    pub fn apply(
        &self,
        url: &mut UrlKeyState,
        slugger: &dyn SlugGenerator,
    ) -> DomainResult<Option<NormalizationAdvisory>> {
        if let Some(lang_id) = self.lang_id {
            let lang = LangId::new(lang_id)?;
            if lang != url.lang {
                // same key, new scope: the mapping still has to move
                url.lang = lang;
                url.require_sync();
            }
        }
        if let Some(builder) = self.url_builder {
            url.builder = builder;
        }
        if let Some(active) = self.active {
            url.active = active;
        }
        Ok(self
            .manual_url_key
            .as_deref()
            .and_then(|key| url.set_manual_key(key, slugger)))
    }
}
