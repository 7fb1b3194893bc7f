//! # Pricing Pipeline
//!
//! Turns an order and a list of discount strategies into the amount the
//! customer pays.
//!
//! ## Algorithm
//! ```text
//! gross      = order.gross_total()
//! deduction  = clamp(strategy.apply(order), 0, gross)   for each strategy
//! discount   = Σ deductions   (summed in ascending order)
//! payable    = round₂(max(0, gross − discount))         ← only rounding
//! ```
//!
//! Summing in ascending order makes the float sum identical for every
//! permutation of the strategy list, so strategy order can never change the
//! result.

use serde::Serialize;
use tracing::{debug, trace};

use crate::discount::DiscountStrategy;
use crate::money::{Amount, Money};
use crate::order::Order;

// =============================================================================
// Price Quote
// =============================================================================

/// One strategy's contribution to a quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deduction {
    pub name: String,
    pub amount: Amount,
}

/// Full pricing breakdown for an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    /// Items plus delivery, before discounts.
    pub gross: Amount,

    /// Clamped deduction per strategy, in strategy order.
    pub deductions: Vec<Deduction>,

    /// Sum of all deductions.
    pub total_discount: Amount,

    /// What the customer pays, rounded to cents.
    pub payable: Money,
}

/// Prices an order against a list of strategies.
pub fn quote(order: &Order, strategies: &[Box<dyn DiscountStrategy>]) -> PriceQuote {
    let gross = order.gross_total();

    let deductions: Vec<Deduction> = strategies
        .iter()
        .map(|strategy| {
            let amount = strategy.apply(order).min(gross);
            trace!(
                order_id = %order.id(),
                strategy = strategy.name(),
                deduction = amount.value(),
                "Discount evaluated"
            );
            Deduction {
                name: strategy.name().to_string(),
                amount,
            }
        })
        .collect();

    let mut amounts: Vec<Amount> = deductions.iter().map(|d| d.amount).collect();
    amounts.sort_by(Amount::total_cmp);
    let total_discount: Amount = amounts.into_iter().sum();

    let payable = gross.saturating_sub(total_discount).to_money();

    debug!(
        order_id = %order.id(),
        created_at = %order.created_at(),
        items = order.item_count(),
        gross = gross.value(),
        discount = total_discount.value(),
        %payable,
        "Order priced"
    );

    PriceQuote {
        gross,
        deductions,
        total_discount,
        payable,
    }
}

/// Gross total minus summed discounts, floored at zero, rounded to cents.
///
/// ## Example
/// ```rust
/// use pizzeria_core::catalog::FixedPricePizza;
/// use pizzeria_core::discount::{DiscountStrategy, LargeOrderDiscount, OnlineOrderDiscount};
/// use pizzeria_core::order::Order;
/// use pizzeria_core::pricing::payable_total;
///
/// let mut order = Order::new(0.0, true).unwrap();
/// order.add_item(FixedPricePizza::new("Margherita", 10.0).unwrap());
/// order.add_item(FixedPricePizza::new("Margherita", 10.0).unwrap());
///
/// let strategies: Vec<Box<dyn DiscountStrategy>> = vec![
///     Box::new(LargeOrderDiscount::default()),
///     Box::new(OnlineOrderDiscount::default()),
/// ];
/// assert_eq!(payable_total(&order, &strategies).to_string(), "$19.20");
/// ```
pub fn payable_total(order: &Order, strategies: &[Box<dyn DiscountStrategy>]) -> Money {
    quote(order, strategies).payable
}

// =============================================================================
// Pricing Pipeline
// =============================================================================

/// An ordered list of discount strategies applied to orders.
#[derive(Debug, Default)]
pub struct PricingPipeline {
    strategies: Vec<Box<dyn DiscountStrategy>>,
}

impl PricingPipeline {
    pub fn new(strategies: Vec<Box<dyn DiscountStrategy>>) -> Self {
        PricingPipeline { strategies }
    }

    /// Builder-style append.
    pub fn with_strategy(mut self, strategy: impl DiscountStrategy + 'static) -> Self {
        self.push(strategy);
        self
    }

    pub fn push(&mut self, strategy: impl DiscountStrategy + 'static) {
        self.strategies.push(Box::new(strategy));
    }

    pub fn strategies(&self) -> &[Box<dyn DiscountStrategy>] {
        &self.strategies
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn quote(&self, order: &Order) -> PriceQuote {
        quote(order, &self.strategies)
    }

    pub fn payable_total(&self, order: &Order) -> Money {
        payable_total(order, &self.strategies)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixedPricePizza;
    use crate::discount::{LargeOrderDiscount, OnlineOrderDiscount};

    /// Returns a fixed deduction regardless of the order.
    #[derive(Debug)]
    struct FlatDiscount(f64);

    impl DiscountStrategy for FlatDiscount {
        fn name(&self) -> &str {
            "flat"
        }

        fn apply(&self, _order: &Order) -> Amount {
            Amount::clamped(self.0)
        }
    }

    fn order_of(count: usize, price: f64, online: bool) -> Order {
        let mut order = Order::new(0.0, online).unwrap();
        for _ in 0..count {
            order.add_item(FixedPricePizza::new("House", price).unwrap());
        }
        order
    }

    fn standard_pipeline() -> PricingPipeline {
        PricingPipeline::default()
            .with_strategy(LargeOrderDiscount::default())
            .with_strategy(OnlineOrderDiscount::default())
    }

    #[test]
    fn test_large_walk_in_order() {
        let order = order_of(5, 10.0, false);
        let quote = standard_pipeline().quote(&order);

        assert_eq!(quote.gross.to_money().cents(), 5000);
        assert_eq!(quote.deductions[0].amount.to_money().cents(), 500);
        assert!(quote.deductions[1].amount.is_zero());
        assert_eq!(quote.payable, Money::from_cents(4500));
    }

    #[test]
    fn test_small_online_order() {
        let order = order_of(2, 10.0, true);
        let quote = standard_pipeline().quote(&order);

        assert!(quote.deductions[0].amount.is_zero());
        assert_eq!(quote.deductions[1].amount.to_money().cents(), 80);
        assert_eq!(quote.payable, Money::from_cents(1920));
    }

    #[test]
    fn test_no_strategies_pays_gross() {
        let mut order = order_of(1, 12.0, true);
        order.add_item(FixedPricePizza::new("Pepperoni", 15.0).unwrap());

        let pipeline = PricingPipeline::default();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.payable_total(&order), Money::from_cents(2700));
    }

    #[test]
    fn test_payable_floors_at_zero() {
        let order = order_of(1, 10.0, false);
        let pipeline = PricingPipeline::default()
            .with_strategy(FlatDiscount(8.0))
            .with_strategy(FlatDiscount(8.0));

        let quote = pipeline.quote(&order);
        assert_eq!(quote.total_discount.value(), 16.0);
        assert!(quote.payable.is_zero());
    }

    #[test]
    fn test_deduction_clamped_to_gross_and_zero() {
        let order = order_of(1, 10.0, false);
        let pipeline = PricingPipeline::default()
            .with_strategy(FlatDiscount(-5.0))
            .with_strategy(FlatDiscount(25.0));

        let quote = pipeline.quote(&order);
        assert!(quote.deductions[0].amount.is_zero());
        assert_eq!(quote.deductions[1].amount.value(), 10.0);
        assert!(quote.payable.is_zero());
    }

    #[test]
    fn test_strategy_order_does_not_matter() {
        let order = order_of(6, 13.37, true);
        let forward = standard_pipeline();
        let reverse = PricingPipeline::default()
            .with_strategy(OnlineOrderDiscount::default())
            .with_strategy(LargeOrderDiscount::default());

        let a = forward.quote(&order);
        let b = reverse.quote(&order);
        assert_eq!(a.total_discount, b.total_discount);
        assert_eq!(a.payable, b.payable);
    }

    #[test]
    fn test_rounding_happens_once() {
        // Three items at $0.334: rounding each would give $0.99.
        let order = order_of(3, 0.334, false);
        let payable = PricingPipeline::default().payable_total(&order);
        assert_eq!(payable, Money::from_cents(100));
    }

    #[test]
    fn test_free_function_matches_pipeline() {
        let order = order_of(4, 9.99, true);
        let pipeline = standard_pipeline();
        assert_eq!(
            payable_total(&order, pipeline.strategies()),
            pipeline.payable_total(&order)
        );
        assert_eq!(pipeline.len(), 2);
    }

    #[test]
    fn test_overflowing_order_saturates_instead_of_going_free() {
        let mut order = Order::new(0.0, true).unwrap();
        order.add_item(FixedPricePizza::new("Huge", f64::MAX).unwrap());
        order.add_item(FixedPricePizza::new("Huge", f64::MAX).unwrap());

        let quote = standard_pipeline().quote(&order);
        assert!(quote.gross.value().is_finite());
        assert!(!quote.deductions[1].amount.is_zero());
        assert_eq!(quote.payable, Money::MAX);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_pricing_types_are_send_sync() {
        assert_send_sync::<Order>();
        assert_send_sync::<crate::catalog::Pizza>();
        assert_send_sync::<PricingPipeline>();
        assert_send_sync::<PriceQuote>();
    }

    #[test]
    fn test_snapshot_priced_from_two_threads() {
        let order = order_of(5, 11.5, true);
        let pipeline = standard_pipeline();

        let (a, b) = std::thread::scope(|s| {
            let first = s.spawn(|| pipeline.quote(&order));
            let second = s.spawn(|| pipeline.quote(&order));
            (first.join().unwrap(), second.join().unwrap())
        });

        assert_eq!(a, b);
        assert_eq!(a, pipeline.quote(&order));
    }
}
