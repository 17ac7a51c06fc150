pub mod catalog;
pub mod domain;

pub use catalog::{Catalog, CatalogError};
