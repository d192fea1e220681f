//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The cart model and its reducer (`cart`) are kept apart from the reactive
//! store seam (`store`) so the reducer stays plain Rust.

pub mod cart;
pub mod catalog;
pub mod store;
