//! Test fixtures for route-optimizer.
//!
//! Provides:
//! - Real Delhi-area locations (from OpenStreetMap) for realistic inputs
//! - In-memory fakes for the geocoding and routing collaborators

pub mod delhi_locations;

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use route_optimizer::coord::Coordinate;
use route_optimizer::error::{GeocodeError, RoutingError};
use route_optimizer::traits::{Geocoder, ProviderLeg, RouteProvider};

/// Geocoder backed by a fixed text -> coordinate table. Unknown addresses
/// answer `NotFound`; addresses listed in `outages` answer
/// `ResolutionFailed`.
pub struct FakeGeocoder {
    table: HashMap<String, Coordinate>,
    outages: Vec<String>,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            outages: Vec::new(),
        }
    }

    pub fn with_locations(locations: &[delhi_locations::Location]) -> Self {
        let mut geocoder = Self::new();
        for location in locations {
            geocoder
                .table
                .insert(location.name.to_string(), location.coord());
        }
        geocoder
    }

    pub fn failing_for(mut self, text: &str) -> Self {
        self.outages.push(text.to_string());
        self
    }
}

impl Geocoder for FakeGeocoder {
    fn resolve(&self, text: &str) -> Result<Coordinate, GeocodeError> {
        if self.outages.iter().any(|outage| outage == text) {
            return Err(GeocodeError::ResolutionFailed("service outage".to_string()));
        }
        self.table.get(text).copied().ok_or(GeocodeError::NotFound)
    }
}

/// Routing provider that synthesizes one leg per waypoint pair from
/// straight-line distance at a fixed speed, and records every request.
pub struct FakeRouter {
    pub speed_kmh: f64,
    /// Optional delay before answering, for overlap tests.
    pub latency: Option<Duration>,
    pub requests: Mutex<Vec<Vec<Coordinate>>>,
}

impl FakeRouter {
    pub fn new() -> Self {
        Self {
            speed_kmh: 40.0,
            latency: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn slow(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::new()
        }
    }
}

impl RouteProvider for FakeRouter {
    fn route(&self, waypoints: &[Coordinate]) -> Result<Vec<ProviderLeg>, RoutingError> {
        if let Some(latency) = self.latency {
            std::thread::sleep(latency);
        }
        self.requests.lock().unwrap().push(waypoints.to_vec());

        Ok(waypoints
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let km = pair[0].haversine_km(&pair[1]);
                ProviderLeg {
                    distance_m: km * 1000.0,
                    duration_s: km / self.speed_kmh * 3600.0,
                    instruction: format!("Drive leg {}", i + 1),
                }
            })
            .collect())
    }
}

/// Routing provider that always fails with the given error.
pub struct BrokenRouter(pub RoutingError);

impl RouteProvider for BrokenRouter {
    fn route(&self, _waypoints: &[Coordinate]) -> Result<Vec<ProviderLeg>, RoutingError> {
        Err(self.0.clone())
    }
}
