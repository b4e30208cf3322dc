pub mod category;
pub mod product;
pub mod repository;
pub mod value_objects;

pub use category::{Category, NewCategory};
pub use product::{NewProduct, Product};
pub use repository::{CatalogRecord, CatalogTransaction, CatalogUnitOfWork, RecordStore};
pub use value_objects::RecordName;
