// tests/support/builders.rs
use base_url::application::commands::records::{
    CreateCategoryCommand, CreateProductCommand, UpdateProductCommand, UrlKeyInput,
};
use base_url::domain::url::{BackendId, LangId, UrlBuilderMode, UrlScope};

use super::mocks::KNOWN_BACKEND;

pub fn scope(lang: i64) -> UrlScope {
    UrlScope::new(BackendId::new(KNOWN_BACKEND).unwrap(), LangId::new(lang).unwrap())
}

pub struct ProductBuilder {
    name: String,
    default_code: Option<String>,
    lang_id: i64,
    url: UrlKeyInput,
}

impl ProductBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_code: None,
            lang_id: 1,
            url: UrlKeyInput::default(),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.default_code = Some(code.into());
        self
    }

    pub fn lang(mut self, lang_id: i64) -> Self {
        self.lang_id = lang_id;
        self
    }

    pub fn manual(mut self, key: impl Into<String>) -> Self {
        self.url.url_builder = Some(UrlBuilderMode::Manual);
        self.url.manual_url_key = Some(key.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.url.active = Some(false);
        self
    }

    pub fn build(self) -> CreateProductCommand {
        CreateProductCommand {
            backend_id: KNOWN_BACKEND,
            lang_id: self.lang_id,
            name: self.name,
            default_code: self.default_code,
            url: self.url,
        }
    }
}

pub fn category(name: impl Into<String>) -> CreateCategoryCommand {
    CreateCategoryCommand {
        backend_id: KNOWN_BACKEND,
        lang_id: 1,
        name: name.into(),
        url: UrlKeyInput::default(),
    }
}

/// Update touching nothing but the url fields.
pub fn url_update(id: i64, url: UrlKeyInput) -> UpdateProductCommand {
    UpdateProductCommand {
        id,
        name: None,
        default_code: None,
        url,
    }
}

pub fn manual_key(key: &str) -> UrlKeyInput {
    UrlKeyInput {
        url_builder: Some(UrlBuilderMode::Manual),
        manual_url_key: Some(key.to_string()),
        ..UrlKeyInput::default()
    }
}

pub fn automatic() -> UrlKeyInput {
    UrlKeyInput {
        url_builder: Some(UrlBuilderMode::Automatic),
        ..UrlKeyInput::default()
    }
}

pub fn set_active(active: bool) -> UrlKeyInput {
    UrlKeyInput {
        active: Some(active),
        ..UrlKeyInput::default()
    }
}
