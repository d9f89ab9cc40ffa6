//! Domain layer: entities and data structures
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod avl;
pub mod entities;
pub mod error;
pub mod flight;
pub mod graph;

pub use avl::{AvlTree, InOrder, Node, TreeNodeConvert};
pub use entities::{CrewMember, Keyed};
pub use error::DomainError;
pub use flight::{Flight, Price, Route, ROUTE_SEPARATOR};
pub use graph::{Cost, Graph};
