//! Cart route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts `CartView` and turns its continue-shopping callback into navigation
//! back to the product list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::cart_view::CartView;

#[component]
pub fn CartPage() -> impl IntoView {
    let navigate = use_navigate();

    // Navigation runs from an effect; the callback only records the request.
    let continue_requested = RwSignal::new(false);
    Effect::new(move || {
        if continue_requested.get() {
            continue_requested.set(false);
            navigate("/", NavigateOptions::default());
        }
    });
    let on_continue_shopping = Callback::new(move |()| continue_requested.set(true));

    view! {
        <div class="cart-page">
            <CartView on_continue_shopping=on_continue_shopping/>
        </div>
    }
}
