//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed domain input.
/// The data structures themselves never fail; see the individual operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid route '{0}', expected ORIGIN->DESTINATION")]
    InvalidRoute(String),
}
