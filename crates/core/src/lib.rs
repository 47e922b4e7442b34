//! `storefront-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering):
//! identifiers, money, ratings and the shared error model.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod rating;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, SessionId};
pub use money::Price;
pub use rating::Rating;
pub use value_object::ValueObject;
