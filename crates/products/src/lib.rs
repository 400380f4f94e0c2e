//! Products domain module.
//!
//! The catalog record and its lookups, implemented as deterministic domain
//! logic (no console, no storage beyond the in-memory repository).

pub mod product;

pub use product::{NewProduct, Product, ProductCatalog, ProductId};
