//! flightroster: in-memory flight inventory
//!
//! Flights are vertices of a directed graph whose edges carry connection
//! costs. Every flight keeps its crew in an AVL tree ordered by seat number
//! and derives its ticket price from seat occupancy.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
