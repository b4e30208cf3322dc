pub mod entity;
pub mod repository;

pub use entity::{SettingsCollection, SettingsEntry};
pub use repository::SettingsRepository;
