//! Cart line items and the reducer that mutates them.
//!
//! DESIGN
//! ======
//! `CartState` is the single owner of the cart's item list. Views never touch
//! the list directly: they read an immutable snapshot and submit a
//! `CartAction`, which `apply` validates and applies as one atomic step.
//! Items sit behind an `Arc` so a published snapshot is never mutated; a
//! successful action swaps in a fresh list (copy-on-write).

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// One product line in the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display name; also the key used to target mutations.
    pub name: String,
    /// Currency-formatted unit price, e.g. `"$19.99"`.
    pub cost: String,
    /// Units in the cart. Always at least 1 while the item is present.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl CartItem {
    /// Build an item with quantity 1 and no image or id.
    pub fn new(name: impl Into<String>, cost: impl Into<String>) -> Self {
        Self { name: name.into(), cost: cost.into(), quantity: 1, image: None, id: None }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A mutation request submitted to the cart store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CartAction {
    /// Put an item in the cart, or bump its quantity if already present.
    AddItem { item: CartItem },
    /// Set the quantity of the item named `name`.
    UpdateQuantity { name: String, quantity: u32 },
    /// Drop the item named `name`.
    RemoveItem { name: String },
}

impl CartAction {
    /// Name of the item this action targets.
    pub fn target(&self) -> &str {
        match self {
            Self::AddItem { item } => &item.name,
            Self::UpdateQuantity { name, .. } | Self::RemoveItem { name } => name,
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddItem { item } => write!(f, "cart/addItem name={}", item.name),
            Self::UpdateQuantity { name, quantity } => {
                write!(f, "cart/updateQuantity name={name} quantity={quantity}")
            }
            Self::RemoveItem { name } => write!(f, "cart/removeItem name={name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cart item not found: {0}")]
    ItemNotFound(String),
    #[error("invalid quantity {quantity} for {name}: must be at least 1")]
    InvalidQuantity { name: String, quantity: u32 },
}

// =============================================================================
// STATE
// =============================================================================

/// The cart as owned by the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    items: Arc<Vec<CartItem>>,
}

impl CartState {
    /// Seed a cart from existing items, dropping any with zero quantity.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let items = items.into_iter().filter(|item| item.quantity > 0).collect();
        Self { items: Arc::new(items) }
    }

    /// Shared handle to the current item list.
    pub fn items(&self) -> &Arc<Vec<CartItem>> {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    pub fn find(&self, name: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` when an update or removal names an item that is
    /// not in the cart, and `InvalidQuantity` when an update would set a
    /// quantity below 1. The state is left untouched on error.
    pub fn apply(&mut self, action: CartAction) -> Result<(), CartError> {
        match action {
            CartAction::AddItem { item } => {
                let items = Arc::make_mut(&mut self.items);
                if let Some(existing) = items.iter_mut().find(|i| i.name == item.name) {
                    existing.quantity = existing.quantity.saturating_add(1);
                } else {
                    items.push(CartItem { quantity: 1, ..item });
                }
                Ok(())
            }
            CartAction::UpdateQuantity { name, quantity } => {
                if quantity == 0 {
                    return Err(CartError::InvalidQuantity { name, quantity });
                }
                let index = self.position(&name).ok_or(CartError::ItemNotFound(name))?;
                Arc::make_mut(&mut self.items)[index].quantity = quantity;
                Ok(())
            }
            CartAction::RemoveItem { name } => {
                let index = self.position(&name).ok_or(CartError::ItemNotFound(name))?;
                Arc::make_mut(&mut self.items).remove(index);
                Ok(())
            }
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }
}
