//! `shopdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no console or I/O concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::SequentialId;
pub use repository::Repository;
pub use value_object::{Money, ValueObject};
