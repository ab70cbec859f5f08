//! Cart line items as stored by the cart store.

use serde::{Deserialize, Serialize};

/// One product line in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Parse a persisted cart, treating unreadable data as an empty cart.
pub fn parse_cart(json: &str) -> Vec<CartItem> {
    serde_json::from_str(json).unwrap_or_default()
}
