//! # Discount Strategies
//!
//! Pluggable policies that compute a deduction for an order.
//!
//! ## Stacking Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every strategy sees the SAME gross total. Deductions are added, not   │
//! │  compounded:                                                            │
//! │                                                                         │
//! │    gross $100.00, large order 10%, online 4%                           │
//! │                                                                         │
//! │    ✅ additive:   100 − (10 + 4)        = $86.00                        │
//! │    ❌ compounded: 100 × 0.90 × 0.96     = $86.40                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! New discounts are added by implementing [`DiscountStrategy`]; the
//! [`PricingPipeline`] is never modified.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::money::Amount;
use crate::order::Order;
use crate::pricing::PricingPipeline;
use crate::validation::{validate_rate_bps, MAX_RATE_BPS};

/// Item count at which the large-order discount starts (inclusive).
pub const DEFAULT_LARGE_ORDER_MIN_ITEMS: usize = 4;

/// Large-order discount: 10%.
pub const DEFAULT_LARGE_ORDER_RATE_BPS: u32 = 1000;

/// Online-order discount: 4%.
pub const DEFAULT_ONLINE_ORDER_RATE_BPS: u32 = 400;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points.
    ///
    /// ## Errors
    /// InvalidValue above 10000 bps (100%).
    pub fn from_bps(bps: u32) -> CoreResult<Self> {
        Ok(DiscountRate(validate_rate_bps("discount rate", bps)?))
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Applies the rate to an amount, without rounding.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::discount::DiscountRate;
    /// use pizzeria_core::money::Amount;
    ///
    /// let rate = DiscountRate::from_bps(400).unwrap(); // 4%
    /// let gross = Amount::new(20.0).unwrap();
    /// assert_eq!(rate.apply_to(gross).to_money().cents(), 80);
    /// ```
    pub fn apply_to(&self, amount: Amount) -> Amount {
        let bps = f64::from(self.0);
        let scaled = amount.value() * bps;
        if scaled.is_finite() {
            Amount::clamped(scaled / f64::from(MAX_RATE_BPS))
        } else {
            // Near f64::MAX the product overflows; scale by the fraction instead.
            amount.scale(bps / f64::from(MAX_RATE_BPS))
        }
    }
}

impl TryFrom<u32> for DiscountRate {
    type Error = ValidationError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        validate_rate_bps("discount rate", bps).map(DiscountRate)
    }
}

impl From<DiscountRate> for u32 {
    fn from(rate: DiscountRate) -> u32 {
        rate.0
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Discount Strategy
// =============================================================================

/// A policy that computes a deduction for an order.
///
/// ## Contract
/// - Returns the deduction in currency units, never negative.
/// - Must not exceed the order's gross total. The pipeline clamps anyway.
/// - Reads the order through `&Order` and never changes it.
/// - Stateless apart from configuration (threshold, rate).
pub trait DiscountStrategy: fmt::Debug + Send + Sync {
    /// Short label shown on receipts and in logs.
    fn name(&self) -> &str;

    /// Deduction for this order.
    fn apply(&self, order: &Order) -> Amount;
}

/// Deducts a percentage of the gross total once an order has enough items.
#[derive(Debug, Clone, PartialEq)]
pub struct LargeOrderDiscount {
    min_items: usize,
    rate: DiscountRate,
}

impl LargeOrderDiscount {
    pub fn new(min_items: usize, rate: DiscountRate) -> Self {
        LargeOrderDiscount { min_items, rate }
    }

    pub fn min_items(&self) -> usize {
        self.min_items
    }

    pub fn rate(&self) -> DiscountRate {
        self.rate
    }
}

impl Default for LargeOrderDiscount {
    fn default() -> Self {
        LargeOrderDiscount {
            min_items: DEFAULT_LARGE_ORDER_MIN_ITEMS,
            rate: DiscountRate(DEFAULT_LARGE_ORDER_RATE_BPS),
        }
    }
}

impl DiscountStrategy for LargeOrderDiscount {
    fn name(&self) -> &str {
        "large order"
    }

    fn apply(&self, order: &Order) -> Amount {
        if order.item_count() >= self.min_items {
            self.rate.apply_to(order.gross_total())
        } else {
            Amount::zero()
        }
    }
}

/// Deducts a percentage of the gross total for orders placed online.
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineOrderDiscount {
    rate: DiscountRate,
}

impl OnlineOrderDiscount {
    pub fn new(rate: DiscountRate) -> Self {
        OnlineOrderDiscount { rate }
    }

    pub fn rate(&self) -> DiscountRate {
        self.rate
    }
}

impl Default for OnlineOrderDiscount {
    fn default() -> Self {
        OnlineOrderDiscount {
            rate: DiscountRate(DEFAULT_ONLINE_ORDER_RATE_BPS),
        }
    }
}

impl DiscountStrategy for OnlineOrderDiscount {
    fn name(&self) -> &str {
        "online order"
    }

    fn apply(&self, order: &Order) -> Amount {
        if order.is_online_order() {
            self.rate.apply_to(order.gross_total())
        } else {
            Amount::zero()
        }
    }
}

// =============================================================================
// Discount Policy (configuration)
// =============================================================================

/// Settings for [`LargeOrderDiscount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LargeOrderSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Inclusive item-count threshold.
    #[serde(default = "default_min_items")]
    pub min_items: usize,

    #[serde(default = "default_large_order_rate")]
    pub rate_bps: u32,
}

/// Settings for [`OnlineOrderDiscount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineOrderSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_online_order_rate")]
    pub rate_bps: u32,
}

fn default_true() -> bool {
    true
}

fn default_min_items() -> usize {
    DEFAULT_LARGE_ORDER_MIN_ITEMS
}

fn default_large_order_rate() -> u32 {
    DEFAULT_LARGE_ORDER_RATE_BPS
}

fn default_online_order_rate() -> u32 {
    DEFAULT_ONLINE_ORDER_RATE_BPS
}

impl Default for LargeOrderSettings {
    fn default() -> Self {
        LargeOrderSettings {
            enabled: true,
            min_items: default_min_items(),
            rate_bps: default_large_order_rate(),
        }
    }
}

impl Default for OnlineOrderSettings {
    fn default() -> Self {
        OnlineOrderSettings {
            enabled: true,
            rate_bps: default_online_order_rate(),
        }
    }
}

/// Which built-in discounts are active and how they are tuned.
///
/// ## Example Config
/// ```toml
/// [large_order]
/// enabled = true
/// min_items = 4
/// rate_bps = 1000   # 10%
///
/// [online_order]
/// enabled = true
/// rate_bps = 400    # 4%
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountPolicy {
    #[serde(default)]
    pub large_order: LargeOrderSettings,

    #[serde(default)]
    pub online_order: OnlineOrderSettings,
}

impl DiscountPolicy {
    /// Checks thresholds and rates.
    pub fn validate(&self) -> CoreResult<()> {
        if self.large_order.min_items == 0 {
            return Err(ValidationError::MustBePositive {
                field: "large_order.min_items".to_string(),
            }
            .into());
        }
        validate_rate_bps("large_order.rate_bps", self.large_order.rate_bps)?;
        validate_rate_bps("online_order.rate_bps", self.online_order.rate_bps)?;
        Ok(())
    }

    /// Builds the enabled strategies, large order first.
    pub fn strategies(&self) -> CoreResult<Vec<Box<dyn DiscountStrategy>>> {
        self.validate()?;

        let mut strategies: Vec<Box<dyn DiscountStrategy>> = Vec::new();
        if self.large_order.enabled {
            strategies.push(Box::new(LargeOrderDiscount::new(
                self.large_order.min_items,
                DiscountRate::from_bps(self.large_order.rate_bps)?,
            )));
        }
        if self.online_order.enabled {
            strategies.push(Box::new(OnlineOrderDiscount::new(DiscountRate::from_bps(
                self.online_order.rate_bps,
            )?)));
        }
        Ok(strategies)
    }

    /// Builds a pipeline from the enabled strategies.
    pub fn pipeline(&self) -> CoreResult<PricingPipeline> {
        Ok(PricingPipeline::new(self.strategies()?))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
