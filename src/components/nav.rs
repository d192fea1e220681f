//! Top navigation with a live cart badge.

use leptos::prelude::*;

use crate::state::cart::CartState;

#[component]
pub fn Nav() -> impl IntoView {
    let store = expect_context::<RwSignal<CartState>>();
    let count = Memo::new(move |_| store.with(CartState::item_count));

    view! {
        <nav class="navbar">
            <a class="navbar__link" href="/">"Plants"</a>
            <a class="navbar__link navbar__cart" href="/cart">
                "Cart"
                <span class="navbar__badge">{move || count.get()}</span>
            </a>
        </nav>
    }
}
