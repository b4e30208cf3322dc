use crate::domain::settings::SettingsEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SettingsEntryDto {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<SettingsEntry> for SettingsEntryDto {
    fn from(entry: SettingsEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            code: entry.code,
        }
    }
}

/// Collections keyed by name (`countries`, `titles`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SettingsDto {
    #[serde(flatten)]
    pub collections: BTreeMap<String, Vec<SettingsEntryDto>>,
}

impl SettingsDto {
    pub fn get(&self, name: &str) -> Option<&[SettingsEntryDto]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    /// Names of the entries of one collection, in stored order.
    pub fn names(&self, name: &str) -> Vec<&str> {
        self.get(name)
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }
}
