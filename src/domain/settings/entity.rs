// src/domain/settings/entity.rs
use crate::domain::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Catalog lookups a storefront needs to render its forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingsCollection {
    Countries,
    Titles,
    Industries,
    Currencies,
    Languages,
}

impl SettingsCollection {
    pub const ALL: [Self; 5] = [
        Self::Countries,
        Self::Titles,
        Self::Industries,
        Self::Currencies,
        Self::Languages,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Countries => "countries",
            Self::Titles => "titles",
            Self::Industries => "industries",
            Self::Currencies => "currencies",
            Self::Languages => "languages",
        }
    }

    /// Whether the entries depend on what the backend allows.
    pub const fn is_backend_scoped(self) -> bool {
        matches!(self, Self::Countries | Self::Currencies | Self::Languages)
    }
}

impl fmt::Display for SettingsCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsCollection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::NotFound(format!("unknown settings collection: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEntry {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
}
