//! Cart view commands and how they turn into store and host effects.
//!
//! Every button in the cart view produces a `CartCommand`. Resolution is
//! split in two so the branching rules stay testable without a browser:
//!
//! - **Decide**: `CartCommand::mutation` maps a command to at most one
//!   `CartAction`. Decrementing the last unit becomes a removal rather than a
//!   zero quantity.
//! - **Run**: `run_command` sends that action to the store, or hands
//!   navigation and checkout to the host.

#[cfg(test)]
#[path = "cart_actions_test.rs"]
mod cart_actions_test;

use crate::state::cart::{CartAction, CartItem};
use crate::state::store::CartStore;

/// A user intent raised by the cart view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartCommand {
    Increment(CartItem),
    /// Lower quantity by one, or remove the item at quantity 1.
    Decrement(CartItem),
    Remove(CartItem),
    ContinueShopping,
    /// Not implemented yet; only notifies the user.
    Checkout,
}

/// Collaborator that owns navigation and user notifications.
pub trait CartHost {
    fn continue_shopping(&self);
    /// Blocking, acknowledge-only notice.
    fn notify(&self, message: &str);
}

impl CartCommand {
    /// Store mutation this command requests, if any.
    pub fn mutation(&self) -> Option<CartAction> {
        match self {
            Self::Increment(item) => Some(CartAction::UpdateQuantity {
                name: item.name.clone(),
                quantity: item.quantity.saturating_add(1),
            }),
            Self::Decrement(item) if item.quantity > 1 => Some(CartAction::UpdateQuantity {
                name: item.name.clone(),
                quantity: item.quantity - 1,
            }),
            Self::Decrement(item) | Self::Remove(item) => Some(CartAction::RemoveItem { name: item.name.clone() }),
            Self::ContinueShopping | Self::Checkout => None,
        }
    }
}

/// Perform the single effect a command stands for.
pub fn run_command(
    command: CartCommand,
    store: &impl CartStore,
    host: &impl CartHost,
    checkout_message: &str,
) {
    if let Some(action) = command.mutation() {
        store.dispatch(action);
        return;
    }
    match command {
        CartCommand::ContinueShopping => host.continue_shopping(),
        CartCommand::Checkout => host.notify(checkout_message),
        CartCommand::Increment(_) | CartCommand::Decrement(_) | CartCommand::Remove(_) => {}
    }
}
