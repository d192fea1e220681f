//! Cart UI components.
//!
//! `cart_view` renders the whole cart and resolves button presses into store
//! dispatches; `cart_line` is one of its rows. `nav` shows the item-count
//! badge on every route.

pub mod cart_line;
pub mod cart_view;
pub mod nav;
