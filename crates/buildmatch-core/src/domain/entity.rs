//! Domain Layer - Core Entity Trait and Errors
//!
//! Every stored or listed record has a unique ID and can be cloned across
//! the IPC boundary.

use serde::{Deserialize, Serialize};

use super::Role;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// None of these are fatal: every one is recovered by re-issuing the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    /// Validation failure (empty description, malformed intake, bad form field)
    InvalidInput(String),
    /// Missing session or bad credentials
    Unauthorized(String),
    /// Account role differs from the area being accessed
    RoleMismatch { expected: Role, actual: Role },
    Conflict(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            DomainError::RoleMismatch { expected, actual } => write!(
                f,
                "This account is registered as a {}, not a {}. Please use the correct login option.",
                actual.as_str(),
                expected.as_str(),
            ),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
