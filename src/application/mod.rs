//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic on behalf of the command layer.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
