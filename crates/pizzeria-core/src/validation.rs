//! # Validation Module
//!
//! Constructor-time checks for the pricing value objects.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Types                                                        │
//! │  └── u32 sizes, bool flags (negative sizes are unrepresentable)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Prices and delivery cost: finite and >= 0                         │
//! │  ├── Sizes: > 0                                                        │
//! │  └── Names: non-empty after trimming                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Constructed value objects are valid for their whole lifetime          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::validation::{validate_price, validate_size};
//!
//! assert!(validate_price("price", 0.06).is_ok());
//! assert!(validate_size(0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest value a basis-point rate may take (100%).
pub const MAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (toppings, menu pizzas).
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Returns
/// The trimmed name.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price-like amount.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free toppings, free delivery)
///
/// ## Example
/// ```rust
/// use pizzeria_core::validation::validate_price;
///
/// assert!(validate_price("price", 1.50).is_ok());
/// assert!(validate_price("price", 0.0).is_ok());
/// assert!(validate_price("price", -0.01).is_err());
/// ```
pub fn validate_price(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    // Normalise -0.0 so it never renders as "-$0.00".
    Ok(value + 0.0)
}

/// Validates a pizza size in centimetres.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_size(size: u32) -> ValidationResult<u32> {
    if size == 0 {
        return Err(ValidationError::MustBePositive {
            field: "size".to_string(),
        });
    }

    Ok(size)
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_rate_bps(field: &str, bps: u32) -> ValidationResult<u32> {
    if bps > MAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_RATE_BPS as i64,
        });
    }

    Ok(bps)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("name", "  cheese ").unwrap(), "cheese");
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", "   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", 0.0).is_ok());
        assert!(validate_price("price", 0.18).is_ok());
        assert!(validate_price("price", -0.01).is_err());
        assert!(validate_price("price", f64::NAN).is_err());
        assert!(validate_price("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_price_normalises_negative_zero() {
        let value = validate_price("price", -0.0).unwrap();
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size(1).is_ok());
        assert!(validate_size(42).is_ok());
        assert!(validate_size(0).is_err());
    }

    #[test]
    fn test_validate_rate_bps() {
        assert!(validate_rate_bps("rate", 0).is_ok());
        assert!(validate_rate_bps("rate", 1000).is_ok());
        assert!(validate_rate_bps("rate", 10000).is_ok());
        assert!(validate_rate_bps("rate", 10001).is_err());
    }
}
