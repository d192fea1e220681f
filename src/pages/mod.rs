//! Route-level screens.
//!
//! ROUTES
//! ======
//! - `/` (`products`): bundled catalog with add-to-cart buttons.
//! - `/cart` (`cart`): the cart view, whose continue-shopping button returns
//!   to `/`.

pub mod cart;
pub mod products;
