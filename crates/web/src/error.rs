//! Catalog-level errors and the messages users see for them.

use thiserror::Error;

use crate::client::ApiError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No API base URL was configured; nothing is fetched.
    #[error("API URL is not defined.")]
    ConfigurationMissing,

    /// The product list could not be loaded after every retry.
    #[error("Failed to load products: {0}")]
    FetchFailed(ApiError),

    /// A delete request failed. The list is left untouched.
    #[error("Failed to delete product. Please try again.")]
    DeleteFailed(ApiError),
}

impl CatalogError {
    /// Only fetch failures can be retried by the user; a missing API stays
    /// failed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CatalogError::FetchFailed(_))
    }
}
