//! # pizzeria-core: Pure Pricing Logic for Pizza Orders
//!
//! Toppings compose into pizzas, pizzas into orders, and a pipeline of
//! pluggable discount strategies turns an order into the amount payable.
//! Everything here is a pure, synchronous computation with no I/O.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Topping ──► Pizza ──► Order ──► PricingPipeline ──► payable (Money)  │
//! │   price       area +    Σ items   Σ DiscountStrategy   rounded once    │
//! │               toppings  + delivery  deductions                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - `PricedItem`, `Topping`, `Pizza`, `FixedPricePizza`
//! - [`order`] - `Order` aggregation
//! - [`discount`] - `DiscountStrategy` and the built-in discounts
//! - [`pricing`] - `PricingPipeline` and `PriceQuote`
//! - [`receipt`] - text rendering of a quote
//! - [`money`] - `Amount` (unrounded) and `Money` (cents)
//! - [`error`] / [`validation`] - the InvalidValue error and its checks
//!
//! ## Example Usage
//!
//! ```rust
//! use pizzeria_core::{DiscountPolicy, FixedPricePizza, Order};
//!
//! let mut order = Order::new(0.0, false).unwrap();
//! for _ in 0..5 {
//!     order.add_item(FixedPricePizza::new("Margherita", 10.0).unwrap());
//! }
//!
//! let pipeline = DiscountPolicy::default().pipeline().unwrap();
//! assert_eq!(pipeline.payable_total(&order).to_string(), "$45.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod discount;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod receipt;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{FixedPricePizza, Pizza, PricedItem, Topping, BASE_RATE_PER_AREA};
pub use discount::{
    DiscountPolicy, DiscountRate, DiscountStrategy, LargeOrderDiscount, OnlineOrderDiscount,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Amount, Money};
pub use order::Order;
pub use pricing::{payable_total, quote, Deduction, PriceQuote, PricingPipeline};
pub use receipt::Receipt;
