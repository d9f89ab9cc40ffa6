//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services are concrete structs and functions, not traits.

mod demo;
mod inventory;
mod walkthrough;

pub use demo::{demo_routes, load_demo_data, DEMO_CAPACITY};
pub use inventory::{CrewAssignment, InventoryService, SharedFlight};
pub use walkthrough::{run_walkthrough, WalkthroughStep};
