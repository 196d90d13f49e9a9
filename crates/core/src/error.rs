//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant describes a rejected operation. The inventory is left exactly
/// as it was before the call; there are no partial applications.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a negative or malformed price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No item is stored under the given name.
    #[error("item not found: {0}")]
    NotFound(String),

    /// A removal asked for more units than are on hand.
    #[error("insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u64,
        available: u64,
    },

    /// Another item already uses the requested name.
    #[error("name conflict: an item named {0} already exists")]
    NameConflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn insufficient_stock(name: impl Into<String>, requested: u64, available: u64) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            requested,
            available,
        }
    }

    pub fn name_conflict(name: impl Into<String>) -> Self {
        Self::NameConflict(name.into())
    }

    /// Stable, machine-friendly kind for branching and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation",
            DomainError::NotFound(_) => "not_found",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
            DomainError::NameConflict(_) => "name_conflict",
        }
    }
}
