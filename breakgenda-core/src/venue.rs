//! The fixed venue registry.

use serde::Serialize;

use crate::constants::UNKNOWN_VENUE_NAME;

pub type VenueId = u64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: &'static str,
    pub location: &'static str,
}

const VENUES: [Venue; 4] = [
    Venue {
        id: 54245,
        name: "🏛 Carlos Lopes Pavilion",
        location: "https://www.google.com/maps/place/Carlos+Lopes+Pavillion/@38.728949,-9.1517438,15z/data=!4m2!3m1!1s0x0:0x20602ac61a767295",
    },
    Venue {
        id: 54246,
        name: "🧠 Convento do Beato",
        location: "https://www.google.com/maps/place/Convento+do+Beato/@38.7348512,-9.1062672,15z/data=!4m2!3m1!1s0x0:0x1ab47681c49d3234",
    },
    Venue {
        id: 54247,
        name: "💻 Pateo da Galé",
        location: "https://www.google.com/maps/place/Gale+patio/@38.7078904,-9.1383932,15z/data=!4m2!3m1!1s0x0:0x565afd189c874962",
    },
    Venue {
        id: 54248,
        name: "🎙 Teatro Capitólio",
        location: "https://www.google.com/maps/place/Cineteatro+Capit%C3%B3lio/@38.7188644,-9.146635,15z/data=!4m2!3m1!1s0x0:0x4ffd6f3d5b082f50",
    },
];

/// Lookup over the venues the conference uses. Not derived from session
/// data, so a session may reference an id that isn't here.
#[derive(Debug, Clone, Copy, Default)]
pub struct VenueRegistry;

impl VenueRegistry {
    pub fn all(&self) -> &'static [Venue] {
        &VENUES
    }

    pub fn ids(&self) -> impl Iterator<Item = VenueId> {
        VENUES.iter().map(|v| v.id)
    }

    pub fn get(&self, id: VenueId) -> Option<&'static Venue> {
        VENUES.iter().find(|v| v.id == id)
    }

    pub fn name(&self, id: VenueId) -> &'static str {
        self.get(id).map(|v| v.name).unwrap_or(UNKNOWN_VENUE_NAME)
    }

    pub fn location(&self, id: VenueId) -> Option<&'static str> {
        self.get(id).map(|v| v.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_venues_resolve() {
        let registry = VenueRegistry;
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec![54245, 54246, 54247, 54248]);
        assert_eq!(registry.name(54247), "💻 Pateo da Galé");
        assert!(registry.location(54248).is_some());
    }

    #[test]
    fn unknown_venue_falls_back() {
        let registry = VenueRegistry;
        assert!(registry.get(1).is_none());
        assert_eq!(registry.name(1), "Unknown venue");
        assert_eq!(registry.location(1), None);
    }
}
