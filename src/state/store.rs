//! Cart store seam: read a snapshot, dispatch an action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components depend on `CartStore` rather than on `RwSignal<CartState>`
//! directly, so command handling can be exercised against a recording store
//! in tests. The reactive implementation lives here as well and is what the
//! app provides through Leptos context.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::cart::{CartAction, CartItem, CartState};

/// Immutable point-in-time view of the cart's items.
pub type CartSnapshot = Arc<Vec<CartItem>>;

/// External state container for the cart.
pub trait CartStore {
    /// Current items. Never tracked; callers that need reactivity use
    /// [`snapshot_memo`].
    fn snapshot(&self) -> CartSnapshot;

    /// Submit one mutation. Rejected actions are logged and dropped.
    fn dispatch(&self, action: CartAction);
}

impl CartStore for RwSignal<CartState> {
    fn snapshot(&self) -> CartSnapshot {
        self.with_untracked(|state| Arc::clone(state.items()))
    }

    fn dispatch(&self, action: CartAction) {
        let label = action.to_string();
        // Only notify subscribers when the reducer accepted the action.
        self.maybe_update(move |state| match state.apply(action) {
            Ok(()) => {
                leptos::logging::log!("{label}");
                true
            }
            Err(err) => {
                leptos::logging::warn!("{label} rejected: {err}");
                false
            }
        });
    }
}

/// Create the cart store and provide it as context for descendants.
pub fn provide_cart_store(initial: CartState) -> RwSignal<CartState> {
    let store = RwSignal::new(initial);
    provide_context(store);
    store
}

/// Reactive snapshot that only notifies when the item list actually changes.
pub fn snapshot_memo(store: RwSignal<CartState>) -> Memo<CartSnapshot> {
    Memo::new(move |_| store.with(|state| Arc::clone(state.items())))
}
