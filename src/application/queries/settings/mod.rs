mod service;

pub use service::SettingsQueryService;
