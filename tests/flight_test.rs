//! Tests for flight seating and occupancy pricing

use std::collections::HashSet;

use rstest::rstest;

use flightroster::domain::{CrewMember, Flight, Route};

fn flight(capacity: u32, price: u64) -> Flight {
    Flight::new(Route::new("Cordoba", "Buenos Aires"), price, capacity)
}

fn seat_n(flight: &mut Flight, n: u32) {
    for seat in 1..=n {
        assert!(flight.add_crew_member(CrewMember::new(format!("Crew {}", seat), i64::from(seat))));
    }
}

#[rstest]
#[case::empty(0, 100)]
#[case::below_half(4, 100)]
#[case::exactly_half(5, 90)]
#[case::above_half(6, 90)]
#[case::seventy_percent(7, 80)]
#[case::ninety_percent(9, 80)]
#[case::full(10, 60)]
fn given_occupancy_when_calculating_price_then_applies_tier(
    #[case] occupied: u32,
    #[case] expected: u64,
) {
    let mut flight = flight(10, 100);
    seat_n(&mut flight, occupied);

    assert_eq!(flight.occupied_seats(), occupied);
    assert_eq!(flight.calculate_price(), expected);
}

#[rstest]
#[case::full(15, 48_000)]
#[case::seventy_percent(11, 64_000)]
#[case::half_rounds_up(8, 72_000)]
#[case::just_below_half(7, 80_000)]
fn given_odd_capacity_when_calculating_price_then_uses_fractional_thresholds(
    #[case] occupied: u32,
    #[case] expected: u64,
) {
    let mut flight = flight(15, 80_000);
    seat_n(&mut flight, occupied);
    assert_eq!(flight.calculate_price(), expected);
}

#[test]
fn given_non_divisible_price_when_discounting_then_truncates() {
    let mut flight = flight(2, 99);
    seat_n(&mut flight, 2);
    // 99 * 60 / 100 = 59.4
    assert_eq!(flight.calculate_price(), 59);
}

#[rstest]
#[case::full(1, 1, u64::MAX / 100 * 60 + u64::MAX % 100 * 60 / 100)]
#[case::seventy_percent(10, 7, u64::MAX / 100 * 80 + u64::MAX % 100 * 80 / 100)]
#[case::half(10, 5, u64::MAX / 100 * 90 + u64::MAX % 100 * 90 / 100)]
fn given_maximum_price_when_discounting_then_exact_without_overflow(
    #[case] capacity: u32,
    #[case] occupied: u32,
    #[case] expected: u64,
) {
    let mut flight = flight(capacity, u64::MAX);
    seat_n(&mut flight, occupied);
    assert_eq!(flight.calculate_price(), expected);
}

#[test]
fn given_full_flight_when_adding_crew_then_rejected_and_unchanged() {
    let mut flight = flight(3, 100);
    seat_n(&mut flight, 3);

    assert!(!flight.add_crew_member(CrewMember::new("Late", 4)));

    assert_eq!(flight.occupied_seats(), 3);
    assert_eq!(flight.available_seats(), 0);
    assert!(!flight.crew().contains_key(4));
}

#[test]
fn given_duplicate_seat_when_adding_then_occupancy_still_grows() {
    let mut flight = flight(5, 100);

    assert!(flight.add_crew_member(CrewMember::new("Alice", 1)));
    assert!(flight.add_crew_member(CrewMember::new("Bob", 1)));

    assert_eq!(flight.occupied_seats(), 2);
    assert_eq!(flight.crew().len(), 1);
    assert_eq!(flight.crew().get(1).map(CrewMember::name), Some("Alice"));
}

#[test]
fn given_same_route_when_comparing_flights_then_equal_regardless_of_price() {
    let a = Flight::new(Route::new("A", "B"), 100, 10);
    let b = Flight::new(Route::new("A", "B"), 999, 1);
    let c = Flight::new(Route::new("B", "A"), 100, 10);

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<Flight> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Route::new("B", "A")));
}

#[test]
fn given_seated_crew_when_showing_details_then_lists_crew_in_seat_order() {
    let mut flight = flight(4, 1000);
    flight.add_crew_member(CrewMember::new("Carol", 3));
    flight.add_crew_member(CrewMember::new("Alice", 1));

    let details = flight.details();
    let lines: Vec<&str> = details.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Flight from Cordoba to Buenos Aires",
            "Base Price: 1000",
            "Current Price: 900",
            "Occupied Seats: 2/4",
            "Crew Members (In-Order):",
            "  Alice (seat 1)",
            "  Carol (seat 3)",
        ]
    );
}

#[test]
fn given_flight_when_displaying_then_shows_route_price_capacity() {
    assert_eq!(
        flight(15, 80_000).to_string(),
        "Cordoba -> Buenos Aires (price 80000, capacity 15)"
    );
}
