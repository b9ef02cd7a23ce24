//! # Error Types
//!
//! Domain-specific error types for lunchtray-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderError       - order mutations (only UnknownItem)                  │
//! │  ValidationError  - catalog construction and input parsing              │
//! │                                                                         │
//! │  Flow: OrderError / ValidationError → CLI (anyhow context at main)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Order Error
// =============================================================================

/// Errors from mutating an `OrderState`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The item key does not exist in the menu catalog.
    ///
    /// ## When This Occurs
    /// Item keys are expected to come from the catalog itself, so this
    /// signals a caller bug or unvalidated input. The order is left exactly
    /// as it was before the call.
    #[error("Unknown menu item: {0}")]
    UnknownItem(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Amount is below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., two menu items under one key).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type OrderResult<T> = Result<T, OrderError>;
