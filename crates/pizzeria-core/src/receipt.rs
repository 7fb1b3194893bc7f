//! # Receipt
//!
//! Plain-text rendering of a priced order. Formatting only; the numbers
//! come from the [`PriceQuote`].
//!
//! ```text
//! Your order:
//!     - Pizza with: cheese, ham; size: 32cm
//! Delivery: $3.49
//! Discount (online order): -$0.80
//! Total costs: $19.20
//! ```

use std::fmt;

use crate::order::Order;
use crate::pricing::PriceQuote;

const SEPARATOR: &str = "\n\t- ";

/// A receipt borrowing the order and its quote.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    order: &'a Order,
    quote: &'a PriceQuote,
}

impl<'a> Receipt<'a> {
    pub fn new(order: &'a Order, quote: &'a PriceQuote) -> Self {
        Receipt { order, quote }
    }
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Your order:")?;
        for item in self.order.items() {
            write!(f, "{}{}", SEPARATOR, item.describe())?;
        }
        writeln!(f)?;

        if !self.order.delivery_cost().is_zero() {
            writeln!(f, "Delivery: {}", self.order.delivery_cost().to_money())?;
        }

        for deduction in self.quote.deductions.iter().filter(|d| !d.amount.is_zero()) {
            writeln!(
                f,
                "Discount ({}): {}",
                deduction.name,
                deduction.amount.to_money().negate()
            )?;
        }

        write!(f, "Total costs: {}", self.quote.payable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixedPricePizza;
    use crate::discount::OnlineOrderDiscount;
    use crate::pricing::PricingPipeline;

    #[test]
    fn test_receipt_layout() {
        let mut order = Order::new(0.0, true).unwrap();
        order.add_item(FixedPricePizza::new("Margherita", 10.0).unwrap());
        order.add_item(FixedPricePizza::new("Pepperoni", 10.0).unwrap());

        let quote = PricingPipeline::default()
            .with_strategy(OnlineOrderDiscount::default())
            .quote(&order);

        assert_eq!(
            Receipt::new(&order, &quote).to_string(),
            "Your order:\n\t- Margherita\n\t- Pepperoni\n\
             Discount (online order): -$0.80\n\
             Total costs: $19.20"
        );
    }

    #[test]
    fn test_receipt_shows_delivery() {
        let mut order = Order::new(3.49, false).unwrap();
        order.add_item(FixedPricePizza::new("Margherita", 12.0).unwrap());

        let quote = PricingPipeline::default().quote(&order);
        let text = Receipt::new(&order, &quote).to_string();

        assert!(text.contains("Delivery: $3.49\n"));
        assert!(!text.contains("Discount"));
        assert!(text.ends_with("Total costs: $15.49"));
    }
}
