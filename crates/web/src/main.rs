//! Command-line entry point: loads the catalog once and prints it.
//!
//! ```text
//! storefront                 # list products
//! storefront delete <id>     # delete a product (requires the admin role)
//! ```

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, bail};
#[cfg(not(target_arch = "wasm32"))]
use storefront_auth::Session;
#[cfg(not(target_arch = "wasm32"))]
use storefront_core::ProductId;
#[cfg(not(target_arch = "wasm32"))]
use storefront_web::driver::CatalogDriver;
#[cfg(not(target_arch = "wasm32"))]
use storefront_web::{CatalogController, CatalogView, HttpProductApi, StorefrontConfig};

/// Role of the session the CLI acts as.
#[cfg(not(target_arch = "wasm32"))]
const ROLE_VAR: &str = "STOREFRONT_ROLE";

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = StorefrontConfig::from_env().context("failed to load storefront configuration")?;

    let session = match std::env::var(ROLE_VAR) {
        Ok(role) if !role.trim().is_empty() => Session::with_role(role.trim().to_string()),
        _ => Session::anonymous(),
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let delete_target = match args.as_slice() {
        [] => None,
        [cmd, id] if cmd == "delete" => Some(id.parse::<ProductId>()?),
        _ => bail!("usage: storefront [delete <product-id>]"),
    };

    let controller = CatalogController::new(config.clone(), session);

    let view = match config.api_base.clone() {
        Some(base) => {
            tracing::info!(api_base = %base, "loading product catalog");
            let mut driver = CatalogDriver::new(HttpProductApi::new(base), controller);
            driver.mount().await;

            if let Some(id) = delete_target {
                let report = driver.delete(id).await;
                for alert in report.alerts {
                    eprintln!("{alert}");
                }
            }

            driver.controller().view()
        }
        None => {
            let mut controller = controller;
            controller.mount();
            controller.view()
        }
    };

    print!("{view}");

    if matches!(view, CatalogView::Error { .. }) {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build starts from `frontend::main` instead.
}
