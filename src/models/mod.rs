//! Data models for the application.
//!
//! - [`Route`] - Hash-based navigation
//! - [`CartItem`] - Cart line items owned by the cart store

mod cart;
mod route;

pub use cart::{CartItem, parse_cart};
pub use route::Route;
