// src/application/commands/records/mod.rs
mod categories;
mod create;
mod products;
mod service;
mod unlink;
mod url_input;
mod write;

pub use categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand};
pub use products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand};
pub use service::RecordCommandService;
pub use url_input::UrlKeyInput;
pub use write::WriteOutcome;
