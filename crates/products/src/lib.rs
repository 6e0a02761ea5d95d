//! Products module (catalog read side).
//!
//! Products are owned by the remote catalog API. This crate only models the
//! shape we receive and the in-memory list a view displays (no IO, no HTTP).

pub mod catalog;
pub mod product;

pub use catalog::ProductCatalog;
pub use product::Product;
