//! Infrastructure layer: I/O errors and DI container
//!
//! This layer wires up services for the command layer.

pub mod di;
pub mod error;

pub use di::ServiceContainer;
pub use error::{InfraError, InfraResult};
