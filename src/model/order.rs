//! Orders and their line items.

use serde::{Deserialize, Serialize};

/// Internal order identifier (primary key of `orders`).
pub type OrderId = i64;

/// Product identifier (primary key of `products`).
pub type ProductId = i64;

/// One line of an order: a product and how many of it to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    /// Always greater than zero.
    pub quantity: u32,
}

impl OrderLineItem {
    /// Build a line item, rejecting quantities that are not a positive `u32`.
    pub fn new(order_id: OrderId, product_id: ProductId, quantity: i64) -> Option<Self> {
        let quantity = u32::try_from(quantity).ok().filter(|q| *q > 0)?;
        Some(Self {
            order_id,
            product_id,
            quantity,
        })
    }
}
