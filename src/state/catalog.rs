//! Product catalog shown on the product list page.
//!
//! The catalog ships with the bundle as JSON; there is no product API.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

use super::cart::CartItem;

const CATALOG_JSON: &str = include_str!("catalog.json");

/// A product that can be added to the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub cost: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Cart line for one unit of this product.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            name: self.name.clone(),
            cost: self.cost.clone(),
            quantity: 1,
            image: self.image.clone(),
            id: Some(self.id.clone()),
        }
    }
}

/// Load the bundled catalog.
///
/// # Errors
///
/// Returns the serde error if the bundled JSON is malformed.
pub fn load_catalog() -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(CATALOG_JSON)
}

/// Group products by category, keeping first-seen category order.
pub fn by_category(products: &[Product]) -> Vec<(String, Vec<Product>)> {
    let mut groups: Vec<(String, Vec<Product>)> = Vec::new();
    for product in products {
        match groups.iter_mut().find(|(category, _)| *category == product.category) {
            Some((_, members)) => members.push(product.clone()),
            None => groups.push((product.category.clone(), vec![product.clone()])),
        }
    }
    groups
}
