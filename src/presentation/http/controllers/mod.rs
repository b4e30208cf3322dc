// src/presentation/http/controllers/mod.rs
pub mod catalog;
pub mod settings;
pub mod urls;
