//! # Order Service Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError (loja-core)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CoreError (loja-core)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrdersError (this module) ← Adds report serialization failures        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  main() in loja-demo                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use loja_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors from the order service layer.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// Domain rule violated while building an entity.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Report could not be serialized.
    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ValidationError> for OrdersError {
    fn from(err: ValidationError) -> Self {
        OrdersError::Core(CoreError::from(err))
    }
}

/// Convenience type alias for Results with OrdersError.
pub type OrdersResult<T> = Result<T, OrdersError>;
