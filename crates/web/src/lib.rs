//! `storefront-web`
//!
//! **Responsibility:** the storefront's product list view.
//!
//! This crate provides:
//! - Configuration (API base URL, admin role, retry policy)
//! - An HTTP client for the catalog API
//! - A sans-IO controller for the fetch / retry / delete / order flow
//! - A view model consumed by the browser component and the CLI
//!
//! The browser frontend (Leptos) is compiled for `wasm32` only; the native
//! driver and binary for everything else.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod navigation;
pub mod retry;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod driver;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use client::{ApiError, HttpProductApi, ProductApi};
pub use config::{ApiBase, ConfigError, StorefrontConfig};
pub use controller::{CatalogController, Command, FetchPhase, Ticket, ViewState};
pub use error::CatalogError;
pub use navigation::{CheckoutRequest, CheckoutState};
pub use retry::{RetryDecision, RetryPolicy};
pub use view::{CardAction, CatalogView, ProductCard};
