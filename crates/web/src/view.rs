//! View model for the product list.
//!
//! Rendering targets (the browser component, the CLI) consume
//! [`CatalogView`] and never look at controller state directly.

use storefront_core::ProductId;

use crate::controller::ViewState;
use crate::retry::RetryPolicy;

pub const CATALOG_TITLE: &str = "Our Products";
pub const LOADING_TEXT: &str = "Loading products...";
pub const RETRY_LABEL: &str = "Retry";
pub const DELETE_LABEL: &str = "Delete";
pub const ORDER_LABEL: &str = "Order Now";

/// The single control shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Delete,
    Order,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Delete => DELETE_LABEL,
            CardAction::Order => ORDER_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price_label: String,
    pub image: String,
    pub alt: String,
    pub action: CardAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    /// A single loading indicator.
    Loading,
    /// The error message; `show_retry` once automatic retries are exhausted.
    Error { message: String, show_retry: bool },
    Grid {
        title: String,
        cards: Vec<ProductCard>,
    },
}

pub fn render(state: &ViewState, policy: &RetryPolicy, is_admin: bool) -> CatalogView {
    match state {
        ViewState::Loading => CatalogView::Loading,
        ViewState::Failed {
            message,
            retry_count,
            retryable,
        } => CatalogView::Error {
            message: message.clone(),
            show_retry: *retryable && policy.is_exhausted(*retry_count),
        },
        ViewState::Loaded(catalog) => {
            let action = if is_admin {
                CardAction::Delete
            } else {
                CardAction::Order
            };
            let cards = catalog
                .iter()
                .map(|product| ProductCard {
                    id: product.id.clone(),
                    name: product.name.clone(),
                    price_label: product.price_label(),
                    image: product.image.clone(),
                    alt: product.name.clone(),
                    action,
                })
                .collect();

            CatalogView::Grid {
                title: CATALOG_TITLE.to_string(),
                cards,
            }
        }
    }
}

/// Plain-text rendering, used by the CLI.
impl core::fmt::Display for CatalogView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CatalogView::Loading => writeln!(f, "{LOADING_TEXT}"),
            CatalogView::Error {
                message,
                show_retry,
            } => {
                writeln!(f, "{message}")?;
                if *show_retry {
                    writeln!(f, "[{RETRY_LABEL}]")?;
                }
                Ok(())
            }
            CatalogView::Grid { title, cards } => {
                writeln!(f, "{title}")?;
                for card in cards {
                    writeln!(
                        f,
                        "  {}  {}  {}  [{}]",
                        card.id,
                        card.name,
                        card.price_label,
                        card.action.label()
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use storefront_products::{Product, ProductCatalog};

    fn loaded(ids: &[&str]) -> ViewState {
        ViewState::Loaded(ProductCatalog::from_products(
            ids.iter()
                .map(|id| Product::new(*id, format!("Item {id}"), 20.0, format!("/img/{id}.png")))
                .collect(),
        ))
    }

    #[test]
    fn grid_has_one_card_per_product() {
        let view = render(&loaded(&["a", "b", "c"]), &RetryPolicy::default(), false);

        let CatalogView::Grid { title, cards } = view else {
            panic!("Expected grid view");
        };
        assert_eq!(title, "Our Products");
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let first = &cards[0];
        assert_eq!(first.name, "Item a");
        assert_eq!(first.alt, "Item a");
        assert_eq!(first.price_label, "$20");
        assert_eq!(first.image, "/img/a.png");
    }

    #[test]
    fn retry_control_only_after_exhaustion() {
        let failed = |retry_count| ViewState::Failed {
            message: "boom".to_string(),
            retry_count,
            retryable: true,
        };
        let policy = RetryPolicy::default();

        assert_eq!(
            render(&failed(0), &policy, false),
            CatalogView::Error {
                message: "boom".to_string(),
                show_retry: false
            }
        );
        assert_eq!(
            render(&failed(3), &policy, false),
            CatalogView::Error {
                message: "boom".to_string(),
                show_retry: true
            }
        );
    }

    #[test]
    fn non_retryable_failure_never_offers_retry() {
        let failed = ViewState::Failed {
            message: "API URL is not defined.".to_string(),
            retry_count: 0,
            retryable: false,
        };

        let view = render(&failed, &RetryPolicy::fixed(0, Duration::ZERO), false);

        assert_eq!(
            view,
            CatalogView::Error {
                message: "API URL is not defined.".to_string(),
                show_retry: false
            }
        );
    }

    #[test]
    fn empty_catalog_renders_empty_grid() {
        let view = render(&loaded(&[]), &RetryPolicy::default(), true);
        assert!(matches!(view, CatalogView::Grid { ref cards, .. } if cards.is_empty()));
    }

    #[test]
    fn text_rendering_lists_cards() {
        let text = render(&loaded(&["p1"]), &RetryPolicy::default(), true).to_string();
        assert_eq!(text, "Our Products\n  p1  Item p1  $20  [Delete]\n");

        let text = CatalogView::Error {
            message: "Failed to load products: network error: refused".to_string(),
            show_retry: true,
        }
        .to_string();
        assert!(text.ends_with("[Retry]\n"));
    }
}
