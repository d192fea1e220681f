//! Host-supplied display settings for the cart view.
//!
//! Every field has a default, so a host can pass a partial JSON object (or
//! nothing at all) and only override what it needs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/default-placeholder.png";
pub const DEFAULT_IMAGE_ALT: &str = "Product Image";
pub const DEFAULT_EMPTY_MESSAGE: &str = "Your cart is empty!";
pub const DEFAULT_CHECKOUT_MESSAGE: &str = "Checkout functionality will be implemented soon!";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid cart view config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Text and asset settings read by `CartView`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartViewConfig {
    /// Image shown for items without one.
    pub placeholder_image: String,
    /// Alt text for items without a name.
    pub image_alt_fallback: String,
    /// Sole content of the view when the cart is empty.
    pub empty_message: String,
    /// Alert text shown by the checkout button.
    pub checkout_message: String,
    pub currency_symbol: String,
}

impl Default for CartViewConfig {
    fn default() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_owned(),
            image_alt_fallback: DEFAULT_IMAGE_ALT.to_owned(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_owned(),
            checkout_message: DEFAULT_CHECKOUT_MESSAGE.to_owned(),
            currency_symbol: "$".to_owned(),
        }
    }
}

impl CartViewConfig {
    /// Parse a (possibly partial) JSON config object.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
