//! # Money Module
//!
//! Two monetary types with different jobs:
//!
//! - [`Amount`]: an unrounded, non-negative decimal used for every
//!   intermediate cost (topping prices, pizza cost, gross total, discount
//!   deductions). Pizza costs involve `π`, so these cannot be whole cents.
//! - [`Money`]: integer cents. Only the final payable total is a `Money`.
//!
//! ## Rounding Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Topping.cost ──► Pizza.cost ──► Order.gross_total ──► − discounts      │
//! │  (Amount)         (Amount)       (Amount)               (Amount)        │
//! │                                                            │            │
//! │                                            Amount::to_money() ← ONCE    │
//! │                                                            │            │
//! │                                                            ▼            │
//! │                                                  payable total (Money)  │
//! │                                                                         │
//! │  Rounding per item would drift: 3 × $0.334 → $0.99, rounded once the   │
//! │  total is $1.00. Intermediate values are never rounded.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::money::{Amount, Money};
//!
//! let gross = Amount::new(20.0).unwrap();
//! let discount = Amount::new(0.8).unwrap();
//! let payable: Money = gross.saturating_sub(discount).to_money();
//! assert_eq!(payable.to_string(), "$19.20");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use tracing::warn;

use crate::error::CoreResult;
use crate::validation::validate_price;

// =============================================================================
// Amount Type
// =============================================================================

/// An unrounded, finite, non-negative currency amount.
///
/// The inner value is private so the invariant holds for every instance:
/// [`Amount::new`] rejects bad input, [`Amount::clamped`] repairs it.
/// Arithmetic saturates at [`f64::MAX`] instead of overflowing to infinity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Creates an amount, failing with InvalidValue for negative or
    /// non-finite input.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Amount;
    ///
    /// assert_eq!(Amount::new(1.5).unwrap().value(), 1.5);
    /// assert!(Amount::new(-0.01).is_err());
    /// ```
    pub fn new(value: f64) -> CoreResult<Self> {
        Ok(Self::validated("amount", value)?)
    }

    /// Creates an amount, reporting `field` in the validation error.
    pub(crate) fn validated(
        field: &str,
        value: f64,
    ) -> Result<Self, crate::error::ValidationError> {
        validate_price(field, value).map(Amount)
    }

    /// Creates an amount, mapping negative values and NaN to zero and
    /// saturating positive overflow at [`f64::MAX`].
    ///
    /// Used where the rule is "clamp, never fail", such as a discount
    /// deduction computed by a third-party strategy.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Amount;
    ///
    /// assert!(Amount::clamped(-3.0).is_zero());
    /// assert!(Amount::clamped(f64::NAN).is_zero());
    /// assert_eq!(Amount::clamped(2.5).value(), 2.5);
    /// assert_eq!(Amount::clamped(f64::INFINITY).value(), f64::MAX);
    /// ```
    #[inline]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            Amount(0.0)
        } else {
            Amount(value.min(f64::MAX))
        }
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Returns the raw decimal value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Multiplies by a non-negative factor (rates, sizes).
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Amount::clamped(self.0 * factor)
    }

    /// Subtracts, flooring at zero.
    #[inline]
    pub fn saturating_sub(&self, other: Amount) -> Self {
        Amount::clamped(self.0 - other.0)
    }

    /// Returns the smaller of two amounts.
    #[inline]
    pub fn min(self, other: Amount) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Rounds to whole cents (round half to even).
    ///
    /// This is the single rounding step in the pricing flow. Amounts beyond
    /// [`Money::MAX`] saturate to it.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Amount;
    ///
    /// assert_eq!(Amount::new(19.2).unwrap().to_money().cents(), 1920);
    /// assert_eq!(Amount::new(0.125).unwrap().to_money().cents(), 12);
    /// ```
    pub fn to_money(&self) -> Money {
        let cents = (self.0 * 100.0).round_ties_even();
        // i64::MAX is not representable; 2^63 as f64 is the first value past it.
        if cents >= i64::MAX as f64 {
            warn!(amount = self.0, "Amount exceeds the largest payable total, saturating");
            return Money::MAX;
        }
        Money::from_cents(cents as i64)
    }

    /// Total ordering used to sum amounts in a canonical order.
    #[inline]
    pub(crate) fn total_cmp(&self, other: &Amount) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Amount {
    type Error = crate::error::ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Amount::validated("amount", value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> f64 {
        amount.0
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount::clamped(self.0 + other.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), Add::add)
    }
}

/// Shows the amount at full precision. Use [`Amount::to_money`] for display
/// to customers.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Receipts render deductions as negative lines
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Largest representable value.
    pub const MAX: Money = Money(i64::MAX);

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the negated value (for deduction lines on a receipt).
    #[inline]
    pub const fn negate(&self) -> Self {
        Money(-self.0)
    }
}

/// Renders the fixed `$X.XX` convention used on receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
