//! # Order
//!
//! An order collects priced items and carries the two attributes the
//! discount strategies look at: the item count and the online flag.
//!
//! ## Lifecycle
//! ```text
//! Order::new(delivery, online)
//!      │
//!      ▼
//! add_item(pizza) ×N      ← append only, no removal
//!      │
//!      ▼
//! gross_total()           ← recomputed from the items on every call
//!      │
//!      ▼
//! PricingPipeline::quote(&order)
//! ```
//!
//! Mutation goes through `&mut self`, so concurrent `add_item` calls on one
//! order are ruled out by the borrow checker. Shared `&Order` snapshots are
//! `Send + Sync` and may be priced from several threads.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::PricedItem;
use crate::error::CoreResult;
use crate::money::Amount;

/// An order of priced items plus a flat delivery surcharge.
pub struct Order {
    id: Uuid,
    created_at: DateTime<Utc>,
    items: Vec<Box<dyn PricedItem>>,
    delivery_cost: Amount,
    is_online_order: bool,
}

impl Order {
    /// Creates an empty order.
    ///
    /// ## Errors
    /// InvalidValue when `delivery_cost` is negative or not finite.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::order::Order;
    ///
    /// let order = Order::new(3.49, false).unwrap();
    /// assert_eq!(order.item_count(), 0);
    /// assert_eq!(order.gross_total().value(), 3.49);
    ///
    /// assert!(Order::new(-1.0, false).is_err());
    /// ```
    pub fn new(delivery_cost: f64, is_online_order: bool) -> CoreResult<Self> {
        Ok(Order {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            items: Vec::new(),
            delivery_cost: Amount::validated("delivery cost", delivery_cost)?,
            is_online_order,
        })
    }

    /// Appends an item.
    pub fn add_item(&mut self, item: impl PricedItem + 'static) {
        self.items.push(Box::new(item));
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the order was opened. Reported with every priced quote.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn items(&self) -> impl Iterator<Item = &dyn PricedItem> {
        self.items.iter().map(|item| &**item)
    }

    /// Number of items, as used by discount eligibility rules.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn delivery_cost(&self) -> Amount {
        self.delivery_cost
    }

    pub fn is_online_order(&self) -> bool {
        self.is_online_order
    }

    /// Sum of item costs, excluding delivery.
    pub fn items_subtotal(&self) -> Amount {
        self.items.iter().map(|item| item.cost()).sum()
    }

    /// Sum of item costs plus delivery, before any discount.
    pub fn gross_total(&self) -> Amount {
        self.items_subtotal() + self.delivery_cost
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("items", &self.items)
            .field("delivery_cost", &self.delivery_cost)
            .field("is_online_order", &self.is_online_order)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FixedPricePizza, Pizza, Topping};

    const EPSILON: f64 = 1e-9;

    fn margherita() -> FixedPricePizza {
        FixedPricePizza::new("Margherita", 12.0).unwrap()
    }

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new(0.0, true).unwrap();
        assert_eq!(order.item_count(), 0);
        assert!(order.gross_total().is_zero());
        assert!(order.is_online_order());
    }

    #[test]
    fn test_order_identity() {
        let before = Utc::now();
        let order = Order::new(0.0, false).unwrap();
        let after = Utc::now();

        assert!(order.created_at() >= before && order.created_at() <= after);
        assert_ne!(order.id(), Order::new(0.0, false).unwrap().id());

        let debug = format!("{order:?}");
        assert!(debug.contains("created_at"));
    }

    #[test]
    fn test_rejects_negative_delivery_cost() {
        let err = Order::new(-0.5, false).unwrap_err();
        assert_eq!(err.validation().field(), "delivery cost");
    }

    #[test]
    fn test_gross_total_includes_delivery() {
        let mut order = Order::new(3.49, false).unwrap();
        order.add_item(margherita());
        order.add_item(FixedPricePizza::new("Pepperoni", 15.0).unwrap());

        assert_eq!(order.item_count(), 2);
        assert!((order.items_subtotal().value() - 27.0).abs() < EPSILON);
        assert!((order.gross_total().value() - 30.49).abs() < EPSILON);
    }

    #[test]
    fn test_gross_total_tracks_added_items() {
        let mut order = Order::new(0.0, false).unwrap();
        order.add_item(margherita());
        let before = order.gross_total();

        order.add_item(Pizza::new(20).unwrap());
        assert!(order.gross_total().value() > before.value());
    }

    #[test]
    fn test_reference_delivery_order_total() {
        let cheese = std::sync::Arc::new(Topping::new("cheese", 0.06).unwrap());
        let ham = std::sync::Arc::new(Topping::new("ham", 0.08).unwrap());

        let mut order = Order::new(3.49, false).unwrap();
        order.add_item(Pizza::with_toppings(32, [cheese, ham]).unwrap());

        let pizza_cost = 0.0015 * 32.0 * 32.0 * std::f64::consts::PI + (0.06 + 0.08) * 32.0;
        assert!((order.gross_total().value() - (pizza_cost + 3.49)).abs() < EPSILON);
        assert_eq!(order.items().count(), 1);
    }
}
