//! Product list page: the browser side of [`CatalogController`].
//!
//! The component keeps the controller behind `Rc<RefCell<_>>` and executes
//! the commands it returns with the browser's event loop: `spawn_local` for
//! requests, `set_timeout` for retry delays.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use storefront_auth::Session;
use storefront_core::ProductId;

use crate::client::{HttpProductApi, ProductApi};
use crate::config::StorefrontConfig;
use crate::controller::{CatalogController, Command};
use crate::view::{CardAction, CatalogView, LOADING_TEXT, ProductCard, RETRY_LABEL};

/// Executes controller commands and republishes the view after each step.
#[derive(Clone)]
struct Dispatcher {
    controller: Rc<RefCell<CatalogController>>,
    api: Option<HttpProductApi>,
    view: RwSignal<CatalogView>,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl Dispatcher {
    fn mount(&self) {
        let commands = self.controller.borrow_mut().mount();
        self.apply(commands);
    }

    fn retry(&self) {
        let commands = self.controller.borrow_mut().retry();
        self.apply(commands);
    }

    fn delete(&self, id: ProductId) {
        let commands = self.controller.borrow_mut().request_delete(id);
        self.apply(commands);
    }

    fn order(&self, id: &ProductId) {
        let commands = self.controller.borrow_mut().order(id);
        self.apply(commands);
    }

    fn apply(&self, commands: Vec<Command>) {
        if self.controller.borrow().is_torn_down() {
            return;
        }
        let view = self.controller.borrow().view();
        self.view.set(view);

        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&self, command: Command) {
        match command {
            Command::Fetch(ticket) => {
                let Some(api) = self.api.clone() else {
                    tracing::warn!(generation = ticket.generation, "no catalog API configured; dropping fetch");
                    return;
                };
                let this = self.clone();
                spawn_local(async move {
                    let result = api.list_products().await;
                    let next = this.controller.borrow_mut().fetch_completed(ticket, result);
                    this.apply(next);
                });
            }
            Command::ScheduleRetry { ticket, after } => {
                let this = self.clone();
                set_timeout(
                    move || {
                        let next = this.controller.borrow_mut().retry_elapsed(ticket);
                        this.apply(next);
                    },
                    after,
                );
            }
            Command::Delete { ticket, id } => {
                let Some(api) = self.api.clone() else {
                    tracing::warn!(product_id = %id, "no catalog API configured; dropping delete");
                    return;
                };
                let this = self.clone();
                spawn_local(async move {
                    let result = api.delete_product(&id).await;
                    let next = this
                        .controller
                        .borrow_mut()
                        .delete_completed(ticket, &id, result);
                    this.apply(next);
                });
            }
            Command::Alert(message) => {
                if let Err(err) = window().alert_with_message(&message) {
                    tracing::warn!(error = ?err, "failed to show alert");
                }
            }
            Command::Navigate(request) => {
                match serde_wasm_bindgen::to_value(&request.state) {
                    Ok(state) => (self.navigate)(
                        &request.path,
                        NavigateOptions {
                            state: leptos_router::State(Some(state)),
                            ..Default::default()
                        },
                    ),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to encode checkout state");
                    }
                }
            }
        }
    }
}

/// Product list component. Configuration and session are injected.
#[component]
pub fn ProductList(config: StorefrontConfig, session: Session) -> impl IntoView {
    let api = config.api_base.clone().map(HttpProductApi::new);
    let controller = Rc::new(RefCell::new(CatalogController::new(config, session)));
    let view_model = create_rw_signal(controller.borrow().view());

    let dispatcher = Dispatcher {
        controller: controller.clone(),
        api,
        view: view_model,
        navigate: Rc::new(use_navigate()),
    };

    on_cleanup(move || controller.borrow_mut().teardown());

    dispatcher.mount();

    view! {
        <div class="product-list">
        {move || match view_model.get() {
            CatalogView::Loading => view! {
                <div class="text-center text-lg font-semibold">{LOADING_TEXT}</div>
            }
            .into_view(),
            CatalogView::Error { message, show_retry } => {
                let dispatcher = dispatcher.clone();
                view! {
                    <div class="text-center text-red-500">
                        {message}
                        <br/>
                        {show_retry.then(move || view! {
                            <button
                                on:click=move |_| dispatcher.retry()
                                class="bg-blue-500 text-white px-4 py-2 mt-4 rounded-md"
                            >
                                {RETRY_LABEL}
                            </button>
                        })}
                    </div>
                }
                .into_view()
            }
            CatalogView::Grid { title, cards } => {
                let dispatcher = dispatcher.clone();
                view! {
                    <div class="max-w-7xl mx-auto px-4 py-8">
                        <h1 class="text-xl font-bold text-center mb-4">{title}</h1>
                        <div class="grid grid-cols-2 sm:grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-2">
                            {cards
                                .into_iter()
                                .map(|card| product_card(card, dispatcher.clone()))
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_view()
            }
        }}
        </div>
    }
}

fn product_card(card: ProductCard, dispatcher: Dispatcher) -> impl IntoView {
    let id = card.id.clone();
    let action = match card.action {
        CardAction::Delete => view! {
            <button
                on:click=move |_| dispatcher.delete(id.clone())
                class="bg-red-500 text-white p-1 rounded-md"
            >
                {card.action.label()}
            </button>
        }
        .into_view(),
        CardAction::Order => view! {
            <button
                on:click=move |_| dispatcher.order(&id)
                class="bg-[#30d490] p-2 rounded-md text-white"
            >
                {card.action.label()}
            </button>
        }
        .into_view(),
    };

    view! {
        <div class="bg-white shadow-lg rounded-lg overflow-hidden border-2">
            <img src=card.image alt=card.alt class="w-full h-fit object-cover"/>
            <div class="flex justify-between bg-slate-100">
                <p class="text-sm font-semibold p-2">{card.name}</p>
                <p class="text-sm font-bold p-2">{card.price_label}</p>
            </div>
            <div class="p-2 flex justify-center bg-slate-100">{action}</div>
        </div>
    }
}
