//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use crate::config::StorefrontConfig;
use crate::frontend::checkout::CheckoutPage;
use crate::frontend::product_list::ProductList;
use crate::frontend::session::load_session;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let config = match StorefrontConfig::from_build_env() {
        Ok(config) => config,
        Err(err) => {
            // Falls back to "no API configured", which the list reports.
            tracing::error!(error = %err, "invalid storefront configuration");
            StorefrontConfig::default()
        }
    };
    let checkout_path = config.checkout_path.clone();
    let session = load_session();

    view! {
        <Router>
            <Routes>
                <Route
                    path="/"
                    view=move || view! { <ProductList config=config.clone() session=session.clone()/> }
                />
                <Route path=checkout_path view=CheckoutPage/>
            </Routes>
        </Router>
    }
}
