//! Catalog controller: the fetch/retry/delete state machine behind the
//! product list view.
//!
//! The controller performs no IO. Callers feed it user actions and
//! completions, and it answers with [`Command`]s describing the IO to run
//! next (a fetch, a timer, a delete, an alert, a navigation). Every
//! asynchronous completion carries the [`Ticket`] it was issued with; tickets
//! from a previous fetch cycle or from before [`CatalogController::teardown`]
//! are ignored.
//!
//! Lifecycle:
//!
//! ```text
//! Idle -> Fetching -> Loaded
//!            |  ^
//!            v  |
//!       RetryScheduled
//!            |
//! Fetching -> Failed -> (manual retry) -> Idle -> Fetching
//! ```

use std::time::Duration;

use storefront_auth::Session;
use storefront_core::ProductId;
use storefront_products::{Product, ProductCatalog};

use crate::client::ApiError;
use crate::config::StorefrontConfig;
use crate::error::CatalogError;
use crate::navigation::CheckoutRequest;
use crate::retry::RetryDecision;
use crate::view::{self, CatalogView};

/// Identifies the fetch cycle an asynchronous operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// IO requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Issue `GET api/products`, then call `fetch_completed`.
    Fetch(Ticket),
    /// Wait `after`, then call `retry_elapsed`.
    ScheduleRetry { ticket: Ticket, after: Duration },
    /// Issue `DELETE api/products/{id}`, then call `delete_completed`.
    Delete { ticket: Ticket, id: ProductId },
    /// Show a blocking notification.
    Alert(String),
    /// Navigate to checkout carrying the selected product.
    Navigate(CheckoutRequest),
}

/// What the view should currently display.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Failed {
        message: String,
        retry_count: u32,
        /// Whether the user may start a fresh fetch sequence from here.
        retryable: bool,
    },
    Loaded(ProductCatalog),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Fetching,
    RetryScheduled,
    Loaded,
    Failed,
}

#[derive(Debug)]
pub struct CatalogController {
    config: StorefrontConfig,
    session: Session,
    phase: FetchPhase,
    state: ViewState,
    retry_count: u32,
    generation: u64,
    torn_down: bool,
}

impl CatalogController {
    pub fn new(config: StorefrontConfig, session: Session) -> Self {
        Self {
            config,
            session,
            phase: FetchPhase::Idle,
            state: ViewState::Loading,
            retry_count: 0,
            generation: 0,
            torn_down: false,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether the session may delete products (and is not offered ordering).
    pub fn is_admin(&self) -> bool {
        self.session.has_role(&self.config.admin_role)
    }

    /// Products currently displayed, if the list is loaded.
    pub fn catalog(&self) -> Option<&ProductCatalog> {
        match &self.state {
            ViewState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Render the current state into a view model.
    pub fn view(&self) -> CatalogView {
        view::render(&self.state, &self.config.retry, self.is_admin())
    }

    /// Start the initial load.
    ///
    /// Without a configured API the view fails immediately and nothing is
    /// fetched or retried.
    pub fn mount(&mut self) -> Vec<Command> {
        if self.torn_down || self.phase != FetchPhase::Idle {
            return Vec::new();
        }

        self.begin_fetch()
    }

    /// Apply the result of a `Command::Fetch`.
    pub fn fetch_completed(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Product>, ApiError>,
    ) -> Vec<Command> {
        if !self.accepts(ticket) || self.phase != FetchPhase::Fetching {
            tracing::debug!(generation = ticket.generation, "ignoring stale fetch result");
            return Vec::new();
        }

        match result {
            Ok(products) => {
                let catalog = ProductCatalog::from_products(products);
                tracing::info!(
                    products = catalog.len(),
                    retries = self.retry_count,
                    "product catalog loaded"
                );
                self.phase = FetchPhase::Loaded;
                self.state = ViewState::Loaded(catalog);
                Vec::new()
            }
            Err(err) => match self.config.retry.decide(self.retry_count) {
                RetryDecision::RetryAfter(after) => {
                    tracing::warn!(
                        error = %err,
                        retry = self.retry_count + 1,
                        max_retries = self.config.retry.max_retries,
                        delay_ms = after.as_millis() as u64,
                        "product fetch failed; scheduling retry"
                    );
                    self.phase = FetchPhase::RetryScheduled;
                    vec![Command::ScheduleRetry { ticket, after }]
                }
                RetryDecision::GiveUp => {
                    tracing::error!(
                        error = %err,
                        retries = self.retry_count,
                        "product fetch failed; giving up"
                    );
                    self.fail(CatalogError::FetchFailed(err));
                    Vec::new()
                }
            },
        }
    }

    /// The retry delay scheduled by `Command::ScheduleRetry` has passed.
    pub fn retry_elapsed(&mut self, ticket: Ticket) -> Vec<Command> {
        if !self.accepts(ticket) || self.phase != FetchPhase::RetryScheduled {
            tracing::debug!(generation = ticket.generation, "ignoring stale retry timer");
            return Vec::new();
        }

        self.retry_count += 1;
        self.begin_fetch()
    }

    /// Manual retry after the automatic retries are exhausted.
    ///
    /// Resets the retry counter and starts a fresh fetch sequence.
    pub fn retry(&mut self) -> Vec<Command> {
        let retryable = matches!(self.state, ViewState::Failed { retryable: true, .. });
        if self.torn_down
            || self.phase != FetchPhase::Failed
            || !retryable
            || !self.config.retry.is_exhausted(self.retry_count)
        {
            tracing::warn!(phase = ?self.phase, retryable, "manual retry is not available");
            return Vec::new();
        }

        tracing::info!("manual retry requested; resetting retry counter");
        self.retry_count = 0;
        self.phase = FetchPhase::Idle;
        self.begin_fetch()
    }

    /// Ask to delete a product. Only sessions with the admin role may.
    pub fn request_delete(&mut self, id: ProductId) -> Vec<Command> {
        if self.torn_down {
            return Vec::new();
        }

        if !self.is_admin() {
            tracing::warn!(product_id = %id, "delete refused: session is not an admin");
            return Vec::new();
        }

        if self.catalog().and_then(|c| c.get(&id)).is_none() {
            tracing::warn!(product_id = %id, "delete refused: product is not listed");
            return Vec::new();
        }

        tracing::info!(product_id = %id, "deleting product");
        vec![Command::Delete {
            ticket: self.ticket(),
            id,
        }]
    }

    /// Apply the result of a `Command::Delete`.
    ///
    /// Success removes the product locally (no re-fetch). Failure leaves the
    /// list untouched and asks for an alert.
    pub fn delete_completed(
        &mut self,
        ticket: Ticket,
        id: &ProductId,
        result: Result<(), ApiError>,
    ) -> Vec<Command> {
        if !self.accepts(ticket) {
            tracing::debug!(product_id = %id, "ignoring stale delete result");
            return Vec::new();
        }

        match result {
            Ok(()) => {
                if let ViewState::Loaded(catalog) = &mut self.state {
                    if catalog.remove(id).is_some() {
                        tracing::info!(product_id = %id, remaining = catalog.len(), "product deleted");
                    }
                }
                Vec::new()
            }
            Err(err) => {
                tracing::error!(product_id = %id, error = ?err, "failed to delete product");
                vec![Command::Alert(CatalogError::DeleteFailed(err).to_string())]
            }
        }
    }

    /// Ask to order a product: navigate to checkout with it.
    pub fn order(&mut self, id: &ProductId) -> Vec<Command> {
        if self.torn_down {
            return Vec::new();
        }

        if self.is_admin() {
            tracing::warn!(product_id = %id, "order refused: admin sessions manage products instead");
            return Vec::new();
        }

        let Some(product) = self.catalog().and_then(|c| c.get(id)).cloned() else {
            tracing::warn!(product_id = %id, "order refused: product is not listed");
            return Vec::new();
        };

        tracing::info!(product_id = %id, path = %self.config.checkout_path, "navigating to checkout");
        vec![Command::Navigate(CheckoutRequest::new(
            self.config.checkout_path.clone(),
            product,
        ))]
    }

    /// The view is going away. Every outstanding ticket becomes stale.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        tracing::debug!(phase = ?self.phase, "catalog view torn down");
        self.torn_down = true;
        self.generation += 1;
    }

    fn begin_fetch(&mut self) -> Vec<Command> {
        if self.config.api_base.is_none() {
            tracing::error!("catalog API URL is not configured; refusing to fetch");
            self.fail(CatalogError::ConfigurationMissing);
            return Vec::new();
        }

        self.generation += 1;
        self.phase = FetchPhase::Fetching;
        self.state = ViewState::Loading;
        tracing::info!(
            attempt = self.retry_count + 1,
            generation = self.generation,
            "fetching product catalog"
        );
        vec![Command::Fetch(self.ticket())]
    }

    fn fail(&mut self, err: CatalogError) {
        self.phase = FetchPhase::Failed;
        self.state = ViewState::Failed {
            message: err.to_string(),
            retry_count: self.retry_count,
            retryable: err.is_retryable(),
        };
    }

    fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation,
        }
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        !self.torn_down && ticket.generation == self.generation
    }
}
