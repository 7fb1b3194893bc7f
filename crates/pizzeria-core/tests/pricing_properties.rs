//! Property tests for the pricing rules.

use std::f64::consts::PI;
use std::sync::Arc;

use pizzeria_core::{
    Amount, DiscountStrategy, FixedPricePizza, LargeOrderDiscount, Money, OnlineOrderDiscount,
    Order, Pizza, PricedItem, PricingPipeline, Topping,
};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Deducts a fixed amount, whatever the order.
#[derive(Debug)]
struct Flat(f64);

impl DiscountStrategy for Flat {
    fn name(&self) -> &str {
        "flat"
    }

    fn apply(&self, _order: &Order) -> Amount {
        Amount::clamped(self.0)
    }
}

fn strategies_from(kinds: &[(u8, f64)]) -> Vec<Box<dyn DiscountStrategy>> {
    kinds.iter()
        .map(|(kind, value)| -> Box<dyn DiscountStrategy> {
            match kind % 3 {
                0 => Box::new(LargeOrderDiscount::default()),
                1 => Box::new(OnlineOrderDiscount::default()),
                _ => Box::new(Flat(*value)),
            }
        })
        .collect()
}

fn order_from(prices: &[f64], delivery: f64, online: bool) -> Order {
    let mut order = Order::new(delivery, online).unwrap();
    for price in prices {
        order.add_item(FixedPricePizza::new("House", *price).unwrap());
    }
    order
}

proptest! {
    #[test]
    fn topping_cost_equals_price(price in 0.0f64..1_000.0) {
        let topping = Topping::new("olive", price).unwrap();
        prop_assert_eq!(topping.cost().value(), price);
    }

    #[test]
    fn plain_pizza_costs_area(size in 1u32..200) {
        let pizza = Pizza::new(size).unwrap();
        let expected = 0.0015 * f64::from(size).powi(2) * PI;
        prop_assert!(close(pizza.cost().value(), expected));
    }

    #[test]
    fn adding_topping_adds_price_times_size(
        size in 1u32..200,
        existing in prop::collection::vec(0.0f64..5.0, 0..5),
        price in 0.01f64..5.0,
    ) {
        let toppings = existing
            .iter()
            .map(|p| Arc::new(Topping::new("base", *p).unwrap()));
        let mut pizza = Pizza::with_toppings(size, toppings).unwrap();
        let before = pizza.cost().value();

        pizza.add_topping(Topping::new("extra", price).unwrap());
        let after = pizza.cost().value();

        prop_assert!(after > before);
        prop_assert!(close(after - before, price * f64::from(size)));
    }

    #[test]
    fn gross_total_is_sum_of_items_plus_delivery(
        sizes in prop::collection::vec(1u32..60, 0..8),
        delivery in 0.0f64..20.0,
    ) {
        let pizzas: Vec<Pizza> = sizes.iter().map(|s| Pizza::new(*s).unwrap()).collect();
        let expected: f64 = pizzas.iter().map(|p| p.cost().value()).sum::<f64>() + delivery;

        let mut forward = Order::new(delivery, false).unwrap();
        for pizza in pizzas.iter().cloned() {
            forward.add_item(pizza);
        }
        let mut backward = Order::new(delivery, false).unwrap();
        for pizza in pizzas.iter().rev().cloned() {
            backward.add_item(pizza);
        }

        prop_assert!(close(forward.gross_total().value(), expected));
        prop_assert!(close(backward.gross_total().value(), expected));
    }

    #[test]
    fn strategy_order_does_not_change_payable(
        prices in prop::collection::vec(0.0f64..50.0, 0..8),
        online in any::<bool>(),
        kinds in prop::collection::vec((any::<u8>(), 0.0f64..30.0), 0..6),
    ) {
        let order = order_from(&prices, 0.0, online);

        let forward = strategies_from(&kinds);
        let mut reversed_kinds = kinds.clone();
        reversed_kinds.reverse();
        let backward = strategies_from(&reversed_kinds);

        let a = pizzeria_core::quote(&order, &forward);
        let b = pizzeria_core::quote(&order, &backward);

        prop_assert_eq!(a.total_discount, b.total_discount);
        prop_assert_eq!(a.payable, b.payable);
    }

    #[test]
    fn payable_is_never_negative(
        prices in prop::collection::vec(0.0f64..50.0, 0..6),
        flats in prop::collection::vec(0.0f64..500.0, 0..6),
    ) {
        let order = order_from(&prices, 1.0, true);
        let mut pipeline = PricingPipeline::default()
            .with_strategy(LargeOrderDiscount::default())
            .with_strategy(OnlineOrderDiscount::default());
        for flat in flats {
            pipeline.push(Flat(flat));
        }

        let payable = pipeline.payable_total(&order);
        prop_assert!(payable >= Money::zero());
        prop_assert!(payable <= order.gross_total().to_money());
    }
}

#[test]
fn five_pizza_walk_in_order_pays_45() {
    let order = order_from(&[10.0; 5], 0.0, false);
    let pipeline = PricingPipeline::default()
        .with_strategy(LargeOrderDiscount::default())
        .with_strategy(OnlineOrderDiscount::default());

    assert_eq!(pipeline.payable_total(&order), Money::from_cents(4500));
}

#[test]
fn two_pizza_online_order_pays_19_20() {
    let order = order_from(&[10.0; 2], 0.0, true);
    let pipeline = PricingPipeline::default()
        .with_strategy(LargeOrderDiscount::default())
        .with_strategy(OnlineOrderDiscount::default());

    assert_eq!(pipeline.payable_total(&order), Money::from_cents(1920));
}

#[test]
fn invalid_values_are_rejected() {
    assert!(Topping::new("cheese", -0.01).is_err());
    assert!(Pizza::new(0).is_err());
    assert!(Order::new(-0.01, false).is_err());
}
