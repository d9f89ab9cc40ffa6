//! Domain entities: keyed records stored in crew rosters

use std::fmt;

/// Capability of being ordered inside an [`AvlTree`](crate::domain::AvlTree).
///
/// The key must be unique within one tree. Inserting a second entity with an
/// already present key is silently ignored by the tree.
pub trait Keyed {
    fn key(&self) -> i64;
}

/// Crew member assigned to a seat on a flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMember {
    name: String,
    seat: i64,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, seat: i64) -> Self {
        Self {
            name: name.into(),
            seat,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the crew member. The seat (tree position) is unaffected.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn seat(&self) -> i64 {
        self.seat
    }
}

impl Keyed for CrewMember {
    fn key(&self) -> i64 {
        self.seat
    }
}

impl fmt::Display for CrewMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (seat {})", self.name, self.seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_crew_member_when_renamed_then_key_is_unchanged() {
        let mut crew = CrewMember::new("Alice", 7);
        crew.set_name("Alicia");

        assert_eq!(crew.name(), "Alicia");
        assert_eq!(crew.key(), 7);
        assert_eq!(crew.to_string(), "Alicia (seat 7)");
    }
}
