pub mod catalog;
pub mod errors;
pub mod settings;
pub mod url;
