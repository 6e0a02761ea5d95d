//! Navigation from the catalog to checkout.

use serde::{Deserialize, Serialize};

use storefront_products::Product;

pub const DEFAULT_CHECKOUT_PATH: &str = "/checkOutPage";

/// History state attached to the checkout navigation.
///
/// Shaped as `{ "product": { ... } }` so the checkout page can read it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutState {
    pub product: Product,
}

/// A request to leave the catalog for checkout with a selected product.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub path: String,
    pub state: CheckoutState,
}

impl CheckoutRequest {
    pub fn new(path: impl Into<String>, product: Product) -> Self {
        Self {
            path: path.into(),
            state: CheckoutState { product },
        }
    }

    pub fn product(&self) -> &Product {
        &self.state.product
    }
}
