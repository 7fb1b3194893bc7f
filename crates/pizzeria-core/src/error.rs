//! # Error Types
//!
//! Domain-specific error types for pizzeria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizzeria-core errors (this file)                                      │
//! │  ├── CoreError        - The single InvalidValue kind                   │
//! │  └── ValidationError  - Which field failed, and how                    │
//! │                                                                         │
//! │  pizzeria-cli errors (separate crate)                                  │
//! │  └── AppError         - Config / IO failures                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error in this crate is raised by a constructor. Pricing itself
//! (costs, totals, discounts) cannot fail.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
///
/// There is exactly one kind: a numeric or textual invariant was violated
/// while constructing a value object. The object is not created.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A constructor received a value it cannot accept.
    ///
    /// ## When This Occurs
    /// - Topping with a negative price or an empty name
    /// - Pizza with size 0
    /// - Order with a negative delivery cost
    /// - Discount rate above 100%
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] ValidationError),
}

impl CoreError {
    /// Returns the underlying validation failure.
    pub fn validation(&self) -> &ValidationError {
        match self {
            CoreError::InvalidValue(inner) => inner,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These carry the field name so callers can point at the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: f64 },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

impl ValidationError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::Negative { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::NotFinite { field }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
