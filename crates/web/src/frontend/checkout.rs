//! Checkout landing page: shows the product carried in history state.

use leptos::*;
use leptos_router::*;

use crate::navigation::CheckoutState;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let location = use_location();
    let selected = move || {
        location
            .state
            .get()
            .0
            .and_then(|value| serde_wasm_bindgen::from_value::<CheckoutState>(value).ok())
    };

    view! {
        <div class="max-w-xl mx-auto px-4 py-8">
            <h1 class="text-xl font-bold text-center mb-4">"Checkout"</h1>
            {move || match selected() {
                Some(CheckoutState { product }) => {
                    let price = product.price_label();
                    view! {
                        <div class="bg-white shadow-lg rounded-lg overflow-hidden border-2">
                            <img src=product.image.clone() alt=product.name.clone() class="w-full h-fit object-cover"/>
                            <div class="flex justify-between bg-slate-100">
                                <p class="text-sm font-semibold p-2">{product.name.clone()}</p>
                                <p class="text-sm font-bold p-2">{price}</p>
                            </div>
                        </div>
                    }
                    .into_view()
                }
                None => view! {
                    <p class="text-center">"No product selected."</p>
                    <A href="/">"Back to products"</A>
                }
                .into_view(),
            }}
        </div>
    }
}
