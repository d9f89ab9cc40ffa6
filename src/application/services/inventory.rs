//! Flight inventory service
//!
//! Keeps every registered flight as a vertex of a priced route graph and
//! routes crew assignments to the owning flight.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Cost, CrewMember, Flight, Graph, Price, Route};

/// A flight shared between the route graph and callers.
///
/// The route is copied out of the flight so that hashing never has to
/// borrow the cell; it is immutable for the lifetime of the flight.
#[derive(Debug, Clone)]
pub struct SharedFlight {
    route: Route,
    flight: Rc<RefCell<Flight>>,
}

impl SharedFlight {
    pub fn new(flight: Flight) -> Self {
        Self {
            route: flight.route().clone(),
            flight: Rc::new(RefCell::new(flight)),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn flight(&self) -> Ref<'_, Flight> {
        self.flight.borrow()
    }

    pub fn flight_mut(&self) -> RefMut<'_, Flight> {
        self.flight.borrow_mut()
    }
}

impl PartialEq for SharedFlight {
    fn eq(&self, other: &Self) -> bool {
        self.route == other.route
    }
}

impl Eq for SharedFlight {}

impl Hash for SharedFlight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.route.hash(state);
    }
}

impl std::borrow::Borrow<Route> for SharedFlight {
    fn borrow(&self) -> &Route {
        &self.route
    }
}

impl fmt::Display for SharedFlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flight.borrow())
    }
}

/// Outcome of seating a crew member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewAssignment {
    Seated { occupied: u32, capacity: u32 },
    FlightFull { capacity: u32 },
}

/// Service owning the flight graph.
#[derive(Debug, Default)]
pub struct InventoryService {
    graph: Graph<SharedFlight>,
}

impl InventoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new flight as a graph vertex.
    #[instrument(level = "debug", skip(self))]
    pub fn add_flight(
        &mut self,
        route: Route,
        default_price: Price,
        capacity: u32,
    ) -> ApplicationResult<SharedFlight> {
        if self.contains_flight(&route) {
            return Err(ApplicationError::FlightAlreadyExists(route));
        }
        let flight = SharedFlight::new(Flight::new(route, default_price, capacity));
        self.graph.add_vertex(flight.clone());
        info!("added flight {}", flight);
        Ok(flight)
    }

    pub fn contains_flight(&self, route: &Route) -> bool {
        self.graph.contains_vertex(route)
    }

    pub fn flight(&self, route: &Route) -> ApplicationResult<SharedFlight> {
        self.graph
            .vertex(route)
            .cloned()
            .ok_or_else(|| ApplicationError::FlightNotFound(route.clone()))
    }

    /// All registered flights ordered by route.
    pub fn flights(&self) -> Vec<SharedFlight> {
        self.graph
            .vertices()
            .keys()
            .cloned()
            .sorted_by(|a, b| a.route().cmp(b.route()))
            .collect()
    }

    /// Connect two registered flights with a priced edge `from -> to`.
    ///
    /// Re-connecting the same pair replaces the cost.
    #[instrument(level = "debug", skip(self))]
    pub fn connect(&mut self, from: &Route, to: &Route, cost: Cost) -> ApplicationResult<()> {
        let from = self.flight(from)?;
        let to = self.flight(to)?;
        debug!("connecting {} -> {} at {}", from.route(), to.route(), cost);
        self.graph.add_edge(from, to, cost);
        Ok(())
    }

    pub fn cost(&self, from: &Route, to: &Route) -> ApplicationResult<Option<Cost>> {
        self.flight(from)?;
        Ok(self.graph.cost(from, to))
    }

    /// Outgoing connections of a registered flight, ordered by route.
    pub fn neighbors(&self, route: &Route) -> ApplicationResult<Vec<(SharedFlight, Cost)>> {
        self.flight(route)?;
        Ok(self
            .graph
            .neighbors(route)
            .iter()
            .map(|(flight, cost)| (flight.clone(), *cost))
            .sorted_by(|a, b| a.0.route().cmp(b.0.route()))
            .collect())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn add_crew_member(
        &mut self,
        route: &Route,
        name: &str,
        seat: i64,
    ) -> ApplicationResult<CrewAssignment> {
        let shared = self.flight(route)?;
        let mut flight = shared.flight_mut();
        if flight.add_crew_member(CrewMember::new(name, seat)) {
            Ok(CrewAssignment::Seated {
                occupied: flight.occupied_seats(),
                capacity: flight.capacity(),
            })
        } else {
            Ok(CrewAssignment::FlightFull {
                capacity: flight.capacity(),
            })
        }
    }

    pub fn graph(&self) -> &Graph<SharedFlight> {
        &self.graph
    }

    pub fn render_graph(&self) -> String {
        self.graph.render()
    }

    pub fn clear(&mut self) {
        info!("clearing {} flights", self.graph.vertex_count());
        self.graph.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_shared_flight_when_mutated_then_graph_sees_change() {
        let mut service = InventoryService::new();
        let route = Route::new("A", "B");
        let handle = service.add_flight(route.clone(), 100, 2).unwrap();

        handle.flight_mut().add_crew_member(CrewMember::new("Alice", 1));

        let stored = service.flight(&route).unwrap();
        assert_eq!(stored.flight().occupied_seats(), 1);
    }
}
