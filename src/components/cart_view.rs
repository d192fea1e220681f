//! Shopping cart view: line items, running total, and cart actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the cart from the `RwSignal<CartState>` store in context and never
//! mutates it directly. Each button raises a `CartCommand`, which is resolved
//! through `run_command` into a single store dispatch or a host effect.
//! The total is memoized on the item snapshot so unrelated re-renders do not
//! recompute it.

#[cfg(test)]
#[path = "cart_view_test.rs"]
mod cart_view_test;

use leptos::prelude::*;

use crate::components::cart_line::CartLine;
use crate::config::CartViewConfig;
use crate::state::cart::{CartItem, CartState};
use crate::state::store::{CartSnapshot, snapshot_memo};
use crate::util::cart_actions::{CartCommand, CartHost, run_command};
use crate::util::notify;
use crate::util::price::{item_key, total_label};

/// Host side of the cart view: the caller's continue-shopping callback and
/// the browser alert.
#[derive(Clone, Copy)]
struct ViewHost {
    on_continue_shopping: Callback<()>,
}

impl CartHost for ViewHost {
    fn continue_shopping(&self) {
        self.on_continue_shopping.run(());
    }

    fn notify(&self, message: &str) {
        notify::alert(message);
    }
}

/// Row identity for the keyed list. Quantity is part of the key so a row is
/// rebuilt when its quantity changes.
fn row_key(item: &CartItem) -> (String, u32) {
    (item_key(item), item.quantity)
}

#[cfg(test)]
thread_local! {
    static TOTAL_RUNS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Total label derived from the item snapshot. Recomputes only when the
/// snapshot memo reports a changed item list.
fn total_memo(items: Memo<CartSnapshot>, config: CartViewConfig) -> Memo<String> {
    Memo::new(move |_| {
        #[cfg(test)]
        TOTAL_RUNS.with(|runs| runs.set(runs.get() + 1));
        items.with(|items| total_label(items, &config))
    })
}

/// The cart page body. Renders only the empty-cart notice when there is
/// nothing in the cart.
#[component]
pub fn CartView(on_continue_shopping: Callback<()>) -> impl IntoView {
    let store = expect_context::<RwSignal<CartState>>();
    let config = use_context::<CartViewConfig>().unwrap_or_default();

    let items = snapshot_memo(store);
    let total = total_memo(items, config.clone());
    let has_items = move || items.with(|items| !items.is_empty());

    let host = ViewHost { on_continue_shopping };
    let checkout_message = config.checkout_message.clone();
    let on_command = Callback::new(move |command: CartCommand| {
        run_command(command, &store, &host, &checkout_message);
    });

    let empty_message = config.empty_message.clone();

    view! {
        <Show
            when=has_items
            fallback=move || view! { <h2 class="empty-cart-message">{empty_message.clone()}</h2> }
        >
            <div class="cart-container">
                <h2 class="cart-total-amount">{move || total.get()}</h2>
                <div>
                    <For
                        each=move || items.get().to_vec()
                        key=row_key
                        children=move |item| view! { <CartLine item=item on_command=on_command/> }
                    />
                </div>
                <div class="cart-actions">
                    <button
                        class="get-started-button"
                        on:click=move |_| on_command.run(CartCommand::ContinueShopping)
                    >
                        "Continue Shopping"
                    </button>
                    <button
                        class="get-started-button1"
                        on:click=move |_| on_command.run(CartCommand::Checkout)
                    >
                        "Checkout"
                    </button>
                </div>
            </div>
        </Show>
    }
}
