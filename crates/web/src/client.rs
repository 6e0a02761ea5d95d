//! HTTP bindings for the catalog API.

use storefront_core::ProductId;
use storefront_products::Product;

use crate::config::ApiBase;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status code {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Operations the catalog view needs from the API.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    /// `GET api/products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `DELETE api/products/{id}`; the response body is ignored.
    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError>;
}

impl<T: ProductApi + ?Sized> ProductApi for &T {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        (**self).list_products().await
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        (**self).delete_product(id).await
    }
}

/// `reqwest`-backed client. Works natively and in the browser (fetch).
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    base: ApiBase,
    http: reqwest::Client,
}

impl HttpProductApi {
    pub fn new(base: ApiBase) -> Self {
        Self::with_client(base, reqwest::Client::new())
    }

    pub fn with_client(base: ApiBase, http: reqwest::Client) -> Self {
        Self { base, http }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }
}

impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.base.products_url();
        tracing::debug!(%url, "fetching products");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        resp.json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let url = self.base.product_url(id);
        tracing::debug!(%url, product_id = %id, "deleting product");

        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(())
    }
}
