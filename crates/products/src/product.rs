use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// A catalog product as served by `GET api/products`.
///
/// The API keys documents by `_id`; plain `id` is accepted too so fixtures and
/// other backends stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }

    /// Price as shown on a product card: `$` followed by the shortest
    /// decimal form of the number (`12` → `$12`, `12.5` → `$12.5`).
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
