//! # Catalog Types
//!
//! Everything that can be priced on an order.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         PricedItem (trait)                              │
//! │                       cost() · describe()                               │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │    Topping      │   │        Pizza         │   │ FixedPricePizza │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  name           │   │  size (cm)           │   │  name           │  │
//! │  │  unit_price     │◄──┤  toppings            │   │  base_price     │  │
//! │  │                 │◄──┼──────────────────────┼───┤  toppings       │  │
//! │  └─────────────────┘   └──────────────────────┘   └─────────────────┘  │
//! │     Arc-shared            area + size-scaled        menu price +        │
//! │     read-only             topping prices            topping prices      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use crate::error::CoreResult;
use crate::money::Amount;
use crate::validation::{validate_name, validate_size};

/// Base price per square centimetre of dough.
pub const BASE_RATE_PER_AREA: f64 = 0.0015;

// =============================================================================
// PricedItem
// =============================================================================

/// Anything that exposes a non-negative cost.
///
/// New item kinds plug into [`Order`](crate::order::Order) by implementing
/// this trait; nothing else changes.
pub trait PricedItem: fmt::Debug + Send + Sync {
    /// Current cost, recomputed on every call.
    fn cost(&self) -> Amount;

    /// Human-readable one-line description.
    fn describe(&self) -> String;
}

// =============================================================================
// Topping
// =============================================================================

/// A named ingredient with a fixed unit price.
///
/// Immutable once created. Wrap it in an [`Arc`] to put the same topping on
/// several pizzas without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct Topping {
    name: String,
    unit_price: Amount,
}

impl Topping {
    /// Creates a topping.
    ///
    /// ## Errors
    /// InvalidValue when the name is empty or the price is negative.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::catalog::{PricedItem, Topping};
    ///
    /// let cheese = Topping::new("cheese", 0.06).unwrap();
    /// assert_eq!(cheese.cost().value(), 0.06);
    /// assert!(Topping::new("cheese", -0.01).is_err());
    /// ```
    pub fn new(name: &str, unit_price: f64) -> CoreResult<Self> {
        let name = validate_name("topping name", name)?;
        let unit_price = Amount::validated("topping price", unit_price)?;
        Ok(Topping { name, unit_price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }
}

impl PricedItem for Topping {
    fn cost(&self) -> Amount {
        self.unit_price
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn join_names(toppings: &[Arc<Topping>]) -> String {
    toppings
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Pizza
// =============================================================================

/// A pizza priced by its size.
///
/// ## Cost Formula
/// ```text
/// cost = 0.0015 × size² × π  +  Σ (topping.unit_price × size)
///        └── dough by area ──┘    └── toppings scale with size ──┘
/// ```
/// Topping prices are multiplied by the size itself, so a bigger pizza pays
/// more per topping, not only for the larger base.
#[derive(Debug, Clone, PartialEq)]
pub struct Pizza {
    size: u32,
    toppings: Vec<Arc<Topping>>,
}

impl Pizza {
    /// Creates a pizza with no toppings.
    ///
    /// ## Errors
    /// InvalidValue when `size` is 0.
    pub fn new(size: u32) -> CoreResult<Self> {
        Ok(Pizza {
            size: validate_size(size)?,
            toppings: Vec::new(),
        })
    }

    /// Creates a pizza with an initial topping list.
    pub fn with_toppings<I>(size: u32, toppings: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = Arc<Topping>>,
    {
        let mut pizza = Pizza::new(size)?;
        pizza.toppings.extend(toppings);
        Ok(pizza)
    }

    /// Appends a topping. Order is kept and duplicates are allowed.
    pub fn add_topping(&mut self, topping: impl Into<Arc<Topping>>) {
        self.toppings.push(topping.into());
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn toppings(&self) -> &[Arc<Topping>] {
        &self.toppings
    }

    /// Area of the pizza, treating `size` as the radius.
    pub fn area(&self) -> f64 {
        let size = f64::from(self.size);
        size * size * PI
    }

    /// Cost of the dough alone.
    pub fn base_cost(&self) -> Amount {
        Amount::clamped(BASE_RATE_PER_AREA * self.area())
    }

    /// Cost contributed by the toppings, each scaled by the size.
    pub fn toppings_cost(&self) -> Amount {
        let size = f64::from(self.size);
        self.toppings
            .iter()
            .map(|t| t.unit_price().scale(size))
            .sum()
    }
}

impl PricedItem for Pizza {
    fn cost(&self) -> Amount {
        self.base_cost() + self.toppings_cost()
    }

    fn describe(&self) -> String {
        format!(
            "Pizza with: {}; size: {}cm",
            join_names(&self.toppings),
            self.size
        )
    }
}

// =============================================================================
// Fixed-Price Pizza
// =============================================================================

/// A menu pizza sold at a flat price, plus whatever toppings are added.
///
/// Unlike [`Pizza`], topping prices are not scaled.
///
/// ## Example
/// ```rust
/// use pizzeria_core::catalog::{FixedPricePizza, PricedItem, Topping};
///
/// let mut cheese = FixedPricePizza::new("Cheese Pizza", 8.99).unwrap();
/// cheese.add_topping(Topping::new("Pepperoni", 1.50).unwrap());
/// assert!((cheese.cost().value() - 10.49).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPricePizza {
    name: String,
    base_price: Amount,
    toppings: Vec<Arc<Topping>>,
}

impl FixedPricePizza {
    /// Creates a menu pizza.
    ///
    /// ## Errors
    /// InvalidValue when the name is empty or the price is negative.
    pub fn new(name: &str, base_price: f64) -> CoreResult<Self> {
        Ok(FixedPricePizza {
            name: validate_name("pizza name", name)?,
            base_price: Amount::validated("pizza price", base_price)?,
            toppings: Vec::new(),
        })
    }

    /// Appends a topping.
    pub fn add_topping(&mut self, topping: impl Into<Arc<Topping>>) {
        self.toppings.push(topping.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Amount {
        self.base_price
    }

    pub fn toppings(&self) -> &[Arc<Topping>] {
        &self.toppings
    }
}

impl PricedItem for FixedPricePizza {
    fn cost(&self) -> Amount {
        self.base_price + self.toppings.iter().map(|t| t.cost()).sum::<Amount>()
    }

    fn describe(&self) -> String {
        if self.toppings.is_empty() {
            self.name.clone()
        } else {
            format!("{} with: {}", self.name, join_names(&self.toppings))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
