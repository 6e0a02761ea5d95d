//! Native driver: runs a [`CatalogController`] against a [`ProductApi`] on
//! tokio.

use std::collections::VecDeque;

use storefront_core::ProductId;

use crate::client::ProductApi;
use crate::controller::{CatalogController, Command};
use crate::navigation::CheckoutRequest;

/// Side effects a driver surfaced to its caller instead of performing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DriveReport {
    /// Blocking notifications, in order.
    pub alerts: Vec<String>,
    pub navigations: Vec<CheckoutRequest>,
}

pub struct CatalogDriver<A> {
    api: A,
    controller: CatalogController,
}

impl<A: ProductApi> CatalogDriver<A> {
    pub fn new(api: A, controller: CatalogController) -> Self {
        Self { api, controller }
    }

    pub fn controller(&self) -> &CatalogController {
        &self.controller
    }

    /// Initial load, including every scheduled retry. Returns once the view
    /// settles on a loaded list or an error.
    pub async fn mount(&mut self) -> DriveReport {
        let commands = self.controller.mount();
        self.run(commands).await
    }

    /// Manual retry after exhaustion.
    pub async fn retry(&mut self) -> DriveReport {
        let commands = self.controller.retry();
        self.run(commands).await
    }

    pub async fn delete(&mut self, id: ProductId) -> DriveReport {
        let commands = self.controller.request_delete(id);
        self.run(commands).await
    }

    pub async fn order(&mut self, id: &ProductId) -> DriveReport {
        let commands = self.controller.order(id);
        self.run(commands).await
    }

    pub fn teardown(&mut self) {
        self.controller.teardown();
    }

    async fn run(&mut self, commands: Vec<Command>) -> DriveReport {
        let mut queue: VecDeque<Command> = commands.into();
        let mut report = DriveReport::default();

        while let Some(command) = queue.pop_front() {
            let next = match command {
                Command::Fetch(ticket) => {
                    let result = self.api.list_products().await;
                    self.controller.fetch_completed(ticket, result)
                }
                Command::ScheduleRetry { ticket, after } => {
                    tokio::time::sleep(after).await;
                    self.controller.retry_elapsed(ticket)
                }
                Command::Delete { ticket, id } => {
                    let result = self.api.delete_product(&id).await;
                    self.controller.delete_completed(ticket, &id, result)
                }
                Command::Alert(message) => {
                    report.alerts.push(message);
                    Vec::new()
                }
                Command::Navigate(request) => {
                    report.navigations.push(request);
                    Vec::new()
                }
            };
            queue.extend(next);
        }

        report
    }
}
