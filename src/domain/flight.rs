//! Flights: priced routes that own a crew roster

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::domain::avl::AvlTree;
use crate::domain::entities::CrewMember;
use crate::domain::error::DomainError;

/// Ticket price in whole currency units.
pub type Price = u64;

/// Separator of the textual route form `ORIGIN->DESTINATION`.
pub const ROUTE_SEPARATOR: &str = "->";

/// `price * percent / 100`, truncated. Widened so large prices cannot overflow.
fn percent_of(price: Price, percent: u8) -> Price {
    let scaled = u128::from(price) * u128::from(percent) / 100;
    // percent <= 100, so the result never exceeds price
    Price::try_from(scaled).unwrap_or(price)
}

/// Origin/destination pair identifying a flight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Route {
    origin: String,
    destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.origin, ROUTE_SEPARATOR, self.destination)
    }
}

impl FromStr for Route {
    type Err = DomainError;

    /// Parse `ORIGIN->DESTINATION`; both sides trimmed and non-empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (origin, destination) = s
            .split_once(ROUTE_SEPARATOR)
            .ok_or_else(|| DomainError::InvalidRoute(s.to_string()))?;
        let (origin, destination) = (origin.trim(), destination.trim());
        if origin.is_empty() || destination.is_empty() || destination.contains(ROUTE_SEPARATOR) {
            return Err(DomainError::InvalidRoute(s.to_string()));
        }
        Ok(Self::new(origin, destination))
    }
}

/// A flight with a fixed seat capacity and a crew roster ordered by seat.
///
/// Equality and hashing only consider the route: two flights between the
/// same cities are the same graph vertex regardless of price or crew.
#[derive(Debug, Clone)]
pub struct Flight {
    route: Route,
    default_price: Price,
    capacity: u32,
    occupied_seats: u32,
    crew: AvlTree<CrewMember>,
}

impl Flight {
    pub fn new(route: Route, default_price: Price, capacity: u32) -> Self {
        Self {
            route,
            default_price,
            capacity,
            occupied_seats: 0,
            crew: AvlTree::new(),
        }
    }

    /// Seat a crew member. Returns `false` when the flight is full.
    ///
    /// The occupancy counter grows on every accepted call, including when the
    /// roster already holds the seat and drops the newcomer, so occupancy can
    /// exceed the number of crew members in the roster.
    pub fn add_crew_member(&mut self, crew_member: CrewMember) -> bool {
        if self.occupied_seats >= self.capacity {
            warn!(route = %self.route, "flight is fully booked");
            return false;
        }
        debug!(route = %self.route, seat = crew_member.seat(), "adding crew member");
        self.crew.insert(crew_member);
        self.occupied_seats += 1;
        true
    }

    /// Current price after occupancy discounts.
    ///
    /// Full: 40% off, at least 70%: 20% off, at least 50%: 10% off.
    pub fn calculate_price(&self) -> Price {
        let occupied = f64::from(self.occupied_seats);
        let capacity = f64::from(self.capacity);

        if self.occupied_seats == self.capacity {
            percent_of(self.default_price, 60)
        } else if occupied >= capacity * 0.7 {
            percent_of(self.default_price, 80)
        } else if occupied >= capacity * 0.5 {
            percent_of(self.default_price, 90)
        } else {
            self.default_price
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn origin(&self) -> &str {
        self.route.origin()
    }

    pub fn destination(&self) -> &str {
        self.route.destination()
    }

    pub fn default_price(&self) -> Price {
        self.default_price
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn occupied_seats(&self) -> u32 {
        self.occupied_seats
    }

    pub fn available_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied_seats)
    }

    pub fn crew(&self) -> &AvlTree<CrewMember> {
        &self.crew
    }

    /// Multi-line summary: route, prices, occupancy and crew in seat order.
    pub fn details(&self) -> String {
        let mut lines = vec![
            format!("Flight from {} to {}", self.origin(), self.destination()),
            format!("Base Price: {}", self.default_price),
            format!("Current Price: {}", self.calculate_price()),
            format!("Occupied Seats: {}/{}", self.occupied_seats, self.capacity),
            "Crew Members (In-Order):".to_string(),
        ];
        lines.extend(self.crew.in_order().map(|c| format!("  {}", c)));
        lines.into_iter().join("\n")
    }
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.route == other.route
    }
}

impl Eq for Flight {}

impl Hash for Flight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.route.hash(state);
    }
}

impl std::borrow::Borrow<Route> for Flight {
    fn borrow(&self) -> &Route {
        &self.route
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (price {}, capacity {})",
            self.route, self.default_price, self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_route_text_with_spaces_when_parsing_then_trims_both_sides() {
        let route: Route = " Cordoba -> Buenos Aires ".parse().unwrap();
        assert_eq!(route.origin(), "Cordoba");
        assert_eq!(route.destination(), "Buenos Aires");
        assert_eq!(route.to_string(), "Cordoba -> Buenos Aires");
    }

    #[test]
    fn given_malformed_route_when_parsing_then_returns_invalid_route() {
        for text in ["Cordoba", "->Bariloche", "Cordoba->", "A->B->C"] {
            let err = text.parse::<Route>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidRoute(_)), "{text}");
        }
    }

    #[test]
    fn given_zero_capacity_when_pricing_then_counts_as_full() {
        let mut flight = Flight::new(Route::new("A", "B"), 100, 0);
        assert!(!flight.add_crew_member(CrewMember::new("Alice", 1)));
        assert_eq!(flight.calculate_price(), 60);
        assert_eq!(flight.available_seats(), 0);
    }
}
