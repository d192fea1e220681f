//! Helpers shared by cart components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure pricing and command logic lives here so components stay thin and the
//! rules can be tested without a browser.

pub mod cart_actions;
pub mod notify;
pub mod price;
