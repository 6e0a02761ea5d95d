//! `storefront-core` — domain building blocks shared by every storefront crate.
//!
//! This crate contains **pure domain** primitives (no HTTP, no rendering).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::DomainError;
pub use id::{ProductId, UserId};
