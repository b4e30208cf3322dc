use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use std::str::FromStr;

macro_rules! positive_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> DomainResult<Self> {
                if id <= 0 {
                    Err(DomainError::Validation(
                        concat!($label, " id must be positive").into(),
                    ))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

positive_id!(RecordId, "record");
positive_id!(BackendId, "backend");
positive_id!(LangId, "lang");
positive_id!(UrlMappingId, "url mapping");

/// A slug that is (or was) the public address of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlKey(String);

impl UrlKey {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("url key cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UrlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UrlKey> for String {
    fn from(value: UrlKey) -> Self {
        value.0
    }
}

/// Reference to the record owning a mapping, rendered as `model,id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerRef {
    model: String,
    id: RecordId,
}

impl OwnerRef {
    pub fn new(model: impl Into<String>, id: RecordId) -> DomainResult<Self> {
        let model = model.into();
        if model.trim().is_empty() || model.contains(',') {
            return Err(DomainError::Validation(format!(
                "invalid owner model name: {model:?}"
            )));
        }
        Ok(Self { model, id })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn id(&self) -> RecordId {
        self.id
    }
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.model, self.id)
    }
}

impl FromStr for OwnerRef {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (model, id) = s
            .split_once(',')
            .ok_or_else(|| DomainError::Validation(format!("invalid owner reference: {s:?}")))?;
        let id = id
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::Validation(format!("invalid owner reference: {s:?}")))?;
        Self::new(model.trim(), RecordId::new(id)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlBuilderMode {
    #[default]
    Automatic,
    Manual,
}

impl UrlBuilderMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automatic => "auto",
            Self::Manual => "manual",
        }
    }
}

impl FromStr for UrlBuilderMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Automatic),
            "manual" => Ok(Self::Manual),
            other => Err(DomainError::Validation(format!(
                "unknown url builder mode: {other}"
            ))),
        }
    }
}

/// Backend + language pair inside which an active url key is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UrlScope {
    pub backend: BackendId,
    pub lang: LangId,
}

impl UrlScope {
    pub const fn new(backend: BackendId, lang: LangId) -> Self {
        Self { backend, lang }
    }
}
