//! Scripted walkthrough exercising flights, connections, crew trees and pricing
//!
//! Runs on its own inventory and reports what each step did, so the caller
//! decides how to display it.

use tracing::{debug, instrument};

use crate::application::services::InventoryService;
use crate::application::ApplicationResult;
use crate::domain::Route;

/// One numbered step of the walkthrough and its textual output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughStep {
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub output: Vec<String>,
}

impl WalkthroughStep {
    fn new(number: usize, title: &'static str, description: &'static str) -> Self {
        Self {
            number,
            title,
            description,
            output: Vec::new(),
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }
}

const CAPACITY: u32 = 15;

fn routes() -> [Route; 3] {
    [
        Route::new("Cordoba", "Buenos Aires"),
        Route::new("Buenos Aires", "Bariloche"),
        Route::new("Cordoba", "Bariloche"),
    ]
}

/// Run all steps against a fresh inventory.
#[instrument(level = "debug")]
pub fn run_walkthrough() -> ApplicationResult<Vec<WalkthroughStep>> {
    let mut service = InventoryService::new();
    let steps = vec![
        add_flights(&mut service)?,
        add_connections(&mut service)?,
        add_crew_members(&mut service)?,
        print_graph(&service),
        print_crew_tree(&service)?,
        pricing(&mut service)?,
    ];
    debug!("walkthrough finished with {} steps", steps.len());
    Ok(steps)
}

fn add_flights(service: &mut InventoryService) -> ApplicationResult<WalkthroughStep> {
    let mut step = WalkthroughStep::new(
        1,
        "Adding Flights",
        "Adds three flights to the graph and verifies their addition.",
    );
    step.push("Flights added:");
    for (route, price) in routes().into_iter().zip([80_000, 150_000, 120_000]) {
        let flight = service.add_flight(route, price, CAPACITY)?;
        step.push(flight.to_string());
    }
    Ok(step)
}

fn add_connections(service: &mut InventoryService) -> ApplicationResult<WalkthroughStep> {
    let mut step = WalkthroughStep::new(
        2,
        "Adding Connections",
        "Creates connections between flights with associated costs.",
    );
    let [first, second, third] = routes();
    let first_price = service.flight(&first)?.flight().default_price();
    let third_price = service.flight(&third)?.flight().default_price();

    service.connect(&first, &second, first_price)?;
    service.connect(&first, &third, third_price)?;

    step.push("Connections added:");
    step.push(format!("{} -> {} (Cost: {})", first, second, first_price));
    step.push(format!("{} -> {} (Cost: {})", first, third, third_price));
    Ok(step)
}

fn add_crew_members(service: &mut InventoryService) -> ApplicationResult<WalkthroughStep> {
    let mut step = WalkthroughStep::new(
        3,
        "Adding Crew Members to a Flight",
        "Adds crew members to one flight and displays tree balancing.",
    );
    let [first, _, _] = routes();
    let flight = service.flight(&first)?;
    let capacity = flight.flight().capacity();

    step.push(format!("Adding crew members to {}:", first));
    for seat in 1..=capacity {
        service.add_crew_member(&first, &format!("Crew {}", seat), i64::from(seat))?;
        step.push(format!("Updated Crew Tree for {}:", first));
        step.push(flight.flight().crew().render());
    }
    step.push("Crew members added.");
    Ok(step)
}

fn print_graph(service: &InventoryService) -> WalkthroughStep {
    let mut step = WalkthroughStep::new(
        4,
        "Printing Flight Graph",
        "Displays the graph structure with flights and their connections.",
    );
    step.push(service.render_graph());
    step
}

fn print_crew_tree(service: &InventoryService) -> ApplicationResult<WalkthroughStep> {
    let mut step = WalkthroughStep::new(
        5,
        "Printing Crew AVL Tree",
        "Prints the crew members as a balanced AVL tree for one flight.",
    );
    let [first, _, _] = routes();
    let flight = service.flight(&first)?;
    step.push(format!("Crew tree for flight {}:", first));
    step.push(flight.flight().crew().render());
    Ok(step)
}

fn pricing(service: &mut InventoryService) -> ApplicationResult<WalkthroughStep> {
    let mut step = WalkthroughStep::new(
        6,
        "Validating Pricing Logic",
        "Verifies pricing adjustments based on flight occupancy levels.",
    );
    let [first, _, _] = routes();
    let flight = service.flight(&first)?;
    let capacity = flight.flight().capacity();

    step.push(format!("Base Price: {}", flight.flight().default_price()));
    step.push(format!("Capacity: {}", capacity));
    step.push(format!(
        "Initial price ({}/{} occupied): {}",
        flight.flight().occupied_seats(),
        capacity,
        flight.flight().calculate_price()
    ));

    let half = capacity / 2;
    for seat in 1..=half {
        service.add_crew_member(&first, &format!("Extra Crew {}", seat), i64::from(seat))?;
    }
    step.push(format!(
        "Price after 50% occupancy: {}",
        flight.flight().calculate_price()
    ));

    for seat in half + 1..=capacity {
        service.add_crew_member(&first, &format!("Extra Crew {}", seat), i64::from(seat))?;
    }
    step.push(format!(
        "Price after 100% occupancy: {}",
        flight.flight().calculate_price()
    ));
    Ok(step)
}
