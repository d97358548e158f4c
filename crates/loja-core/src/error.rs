//! # Error Types
//!
//! Domain-specific error types for loja-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  loja-core errors (this file)                                          │
//! │  ├── CoreError        - Domain errors (InvalidArgument)                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  loja-orders errors (separate crate)                                   │
//! │  └── OrdersError      - Factory / repository / service failures        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → OrdersError → main()              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in error messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An entity was constructed with an argument that breaks its invariants.
    ///
    /// ## When This Occurs
    /// - Product price is zero or negative
    /// - Product or customer name is empty
    /// - Order line quantity is zero or above the maximum
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// A product id was looked up in a catalogue that does not contain it.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before an entity is constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value exceeds its upper bound.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: i64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
