// tests/support/mocks/settings.rs
//! 設定リポジトリのフィクスチャ
use async_trait::async_trait;
use base_url::domain::errors::DomainResult;
use base_url::domain::settings::{SettingsCollection, SettingsEntry, SettingsRepository};
use base_url::domain::url::BackendId;

pub const COUNTRIES: [&str; 5] = ["Belgium", "France", "Italy", "Luxembourg", "Spain"];
pub const TITLES: [&str; 5] = ["Doctor", "Madam", "Miss", "Mister", "Professor"];
pub const INDUSTRIES: [&str; 21] = [
    "Administrative",
    "Agriculture",
    "Construction",
    "Education",
    "Energy supply",
    "Entertainment",
    "Extraterritorial",
    "Finance/Insurance",
    "Food",
    "Health/Social",
    "Households",
    "IT/Communication",
    "Manufacturing",
    "Mining",
    "Other Services",
    "Public Administration",
    "Real Estate",
    "Scientific",
    "Transportation",
    "Water supply",
    "Wholesale/Retail",
];
pub const CURRENCIES: [&str; 2] = ["EUR", "USD"];
pub const LANGUAGES: [&str; 1] = ["English (US)"];

/// Backend 1 with a handful of countries, two currencies and one language.
#[derive(Clone, Default)]
pub struct InMemorySettings;

fn entries(names: &[&str]) -> Vec<SettingsEntry> {
    names
        .iter()
        .zip(1..)
        .map(|(name, id)| SettingsEntry {
            id,
            name: (*name).to_string(),
            code: None,
        })
        .collect()
}

#[async_trait]
impl SettingsRepository for InMemorySettings {
    async fn backend_exists(&self, backend: BackendId) -> DomainResult<bool> {
        Ok(i64::from(backend) == super::KNOWN_BACKEND)
    }

    async fn list(
        &self,
        _backend: BackendId,
        collection: SettingsCollection,
    ) -> DomainResult<Vec<SettingsEntry>> {
        Ok(match collection {
            SettingsCollection::Countries => entries(&COUNTRIES),
            SettingsCollection::Titles => entries(&TITLES),
            SettingsCollection::Industries => entries(&INDUSTRIES),
            SettingsCollection::Currencies => entries(&CURRENCIES),
            SettingsCollection::Languages => entries(&LANGUAGES),
        })
    }
}
