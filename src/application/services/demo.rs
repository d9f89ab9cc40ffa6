//! Canned demo data set

use tracing::{info, instrument};

use crate::application::services::InventoryService;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Route;

/// Seat capacity of every demo flight.
pub const DEMO_CAPACITY: u32 = 15;

const DEMO_FLIGHTS: [(&str, &str, u64); 4] = [
    ("Cordoba", "Buenos Aires", 80_000),
    ("Buenos Aires", "Bariloche", 150_000),
    ("Cordoba", "Bariloche", 120_000),
    ("Bariloche", "Cordoba", 100_000),
];

/// (from flight, to flight, cost) as indices into `DEMO_FLIGHTS`.
const DEMO_CONNECTIONS: [(usize, usize, u64); 4] = [
    (0, 1, 80_000),
    (0, 2, 120_000),
    (2, 3, 100_000),
    (1, 3, 100_000),
];

/// Crew per flight; seats are numbered consecutively across all flights.
const DEMO_CREW: [&[&str]; 4] = [
    &[
        "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy",
        "Ken", "Laura", "Mallory", "Niaj", "Olivia",
    ],
    &[
        "Patrick", "Quinn", "Robert", "Susan", "Trent", "Uma", "Victor", "Walter", "Xander",
        "Yvonne", "Zoe",
    ],
    &[
        "Arthur", "Betty", "Caleb", "Debra", "Elena", "Felix", "Gabriel", "Hannah", "Isabella",
        "Jack", "Karen", "Leo", "Mia", "Noah", "Olivia",
    ],
    &[
        "Paul", "Quincy", "Rita", "Steve", "Tina", "Ursula", "Victor", "Wendy", "Xavier",
    ],
];

/// Routes of the demo flights, in load order.
pub fn demo_routes() -> Vec<Route> {
    DEMO_FLIGHTS
        .iter()
        .map(|(origin, destination, _)| Route::new(*origin, *destination))
        .collect()
}

/// Load four connected flights with partially filled crew rosters.
///
/// Fails with `FlightAlreadyExists` if any demo route is already registered;
/// the inventory is left untouched in that case.
#[instrument(level = "debug", skip(service))]
pub fn load_demo_data(service: &mut InventoryService) -> ApplicationResult<()> {
    info!("loading demo data");
    let routes = demo_routes();

    if let Some(taken) = routes.iter().find(|route| service.contains_flight(route)) {
        return Err(ApplicationError::FlightAlreadyExists(taken.clone()));
    }

    for (route, (_, _, price)) in routes.iter().zip(DEMO_FLIGHTS) {
        service.add_flight(route.clone(), price, DEMO_CAPACITY)?;
    }

    for (from, to, cost) in DEMO_CONNECTIONS {
        service.connect(&routes[from], &routes[to], cost)?;
    }

    let mut seat = 0;
    for (route, names) in routes.iter().zip(DEMO_CREW) {
        for name in names {
            seat += 1;
            service.add_crew_member(route, name, seat)?;
        }
    }

    info!("demo data loaded: {} flights", routes.len());
    Ok(())
}
