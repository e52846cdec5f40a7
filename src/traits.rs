//! Seams for the two external collaborators.
//!
//! Concrete adapters live in `nominatim` and `osrm`; tests substitute
//! in-memory fakes.

use crate::coord::Coordinate;
use crate::error::{GeocodeError, RoutingError};

/// Resolves one free-text address to its best-match coordinate.
///
/// One outbound lookup per call; no implicit caching, so repeated identical
/// text re-queries. Input must be non-blank after trimming (a blank address
/// is a caller error, not a `NotFound`).
pub trait Geocoder: Sync {
    fn resolve(&self, text: &str) -> Result<Coordinate, GeocodeError>;
}

/// One path segment between two consecutive waypoints, in provider units.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderLeg {
    /// Leg distance in meters.
    pub distance_m: f64,
    /// Leg duration in seconds.
    pub duration_s: f64,
    /// Human-readable guidance for driving this leg.
    pub instruction: String,
}

/// Computes a drivable path through an ordered waypoint list.
///
/// The full list goes out in one request (first waypoint is the starting
/// point). A successful response has exactly one leg per consecutive
/// waypoint pair, in waypoint order.
pub trait RouteProvider: Sync {
    fn route(&self, waypoints: &[Coordinate]) -> Result<Vec<ProviderLeg>, RoutingError>;
}
