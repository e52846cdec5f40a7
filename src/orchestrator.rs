//! End-to-end coordination of one optimization run.
//!
//! Each run is independent: Resolving -> Sequencing -> PathBuilding -> Done,
//! failing out of any stage with a typed error and no partial result. The
//! optimizer keeps no cross-run state beyond the in-flight guard.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::aggregator::{self, RouteResult};
use crate::coord::Coordinate;
use crate::error::{OptimizeError, ValidationError};
use crate::registry::{Address, DroppedStop, StopRegistry};
use crate::sequencer;
use crate::traits::{Geocoder, RouteProvider};

/// A successful run: the route plus the context a caller needs to present
/// it, including any stops that were excluded because their address did not
/// geocode.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeOutcome {
    pub route: RouteResult,
    /// Resolved stop addresses, in registry order (the order the route's
    /// indices refer to).
    pub stops: Vec<Address>,
    pub dropped: Vec<DroppedStop>,
}

/// Single-vehicle route optimizer over a geocoder and a routing provider.
///
/// Runs must not overlap on one instance; an `optimize` call issued while a
/// prior call is pending fails with `Busy` instead of touching shared state.
pub struct RouteOptimizer<G, P> {
    geocoder: G,
    provider: P,
    in_flight: AtomicBool,
}

impl<G: Geocoder, P: RouteProvider> RouteOptimizer<G, P> {
    pub fn new(geocoder: G, provider: P) -> Self {
        Self {
            geocoder,
            provider,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolves the addresses, orders the stops, and fetches the drivable
    /// path, returning the aggregate result or the first typed failure.
    pub fn optimize(
        &self,
        starting_text: &str,
        stop_texts: &[String],
    ) -> Result<OptimizeOutcome, OptimizeError> {
        let _run = RunGuard::acquire(&self.in_flight)?;

        // Preconditions, checked before any outbound call.
        if starting_text.trim().is_empty() {
            return Err(ValidationError::MissingStartingPoint.into());
        }
        if stop_texts.iter().all(|text| text.trim().is_empty()) {
            return Err(ValidationError::NoStops.into());
        }

        debug!(state = "resolving", stops = stop_texts.len());
        let mut registry = StopRegistry::new();
        registry.set_starting_point_text(starting_text);
        for text in stop_texts {
            let id = registry.add_stop();
            registry.set_address_text(id, text.clone());
        }
        let resolution = registry.resolve_all(&self.geocoder)?;

        debug!(state = "sequencing", resolved = resolution.stops.len());
        let Some(start_coord) = resolution.starting_point.coordinate else {
            return Err(ValidationError::InvalidStartingPoint.into());
        };
        let stop_coords: Vec<Coordinate> = resolution
            .stops
            .iter()
            .filter_map(|stop| stop.coordinate)
            .collect();
        let order = sequencer::sequence(&start_coord, &stop_coords);

        debug!(state = "path_building", waypoints = order.len() + 1);
        let ordered: Vec<Coordinate> = order.indices().iter().map(|&i| stop_coords[i]).collect();
        let summary = aggregator::build_path(&self.provider, &start_coord, &ordered)?;

        let route = RouteResult {
            total_distance_km: summary.total_distance_km,
            total_duration_min: summary.total_duration_min,
            order,
            starting_point: resolution.starting_point,
            legs: summary.legs,
        };
        info!(
            total_km = route.total_distance_km,
            total_min = route.total_duration_min,
            stops = route.order.len(),
            excluded = resolution.dropped.len(),
            "route optimized"
        );

        Ok(OptimizeOutcome {
            route,
            stops: resolution.stops,
            dropped: resolution.dropped,
        })
    }
}

/// Releases the in-flight flag when the run ends, on any path out.
struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, OptimizeError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_ok()
        {
            Ok(Self(flag))
        } else {
            Err(OptimizeError::Busy)
        }
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
