//! Real Delhi-area locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These are real, geocodable
//! places, so the same names work against live Nominatim.

use route_optimizer::coord::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng).unwrap()
    }
}

// ============================================================================
// Depot candidates (central landmarks)
// ============================================================================

pub const DEPOTS: &[Location] = &[
    Location::new("Connaught Place, New Delhi", 28.6315, 77.2167),
    Location::new("India Gate, New Delhi", 28.6129, 77.2295),
    Location::new("New Delhi Railway Station", 28.6430, 77.2195),
];

// ============================================================================
// Collection stops spread across the city
// ============================================================================

pub const STOPS: &[Location] = &[
    Location::new("Lajpat Nagar, New Delhi", 28.5677, 77.2433),
    Location::new("Karol Bagh, New Delhi", 28.6519, 77.1907),
    Location::new("Hauz Khas, New Delhi", 28.5494, 77.2001),
    Location::new("Chandni Chowk, Delhi", 28.6506, 77.2303),
    Location::new("Saket, New Delhi", 28.5245, 77.2066),
    Location::new("Dwarka, New Delhi", 28.5921, 77.0460),
];
