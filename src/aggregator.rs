//! Path aggregation: turns provider legs into route legs and totals.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coord::Coordinate;
use crate::error::RoutingError;
use crate::registry::Address;
use crate::sequencer::RouteOrder;
use crate::traits::RouteProvider;

/// One driven segment between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub distance_km: f64,
    pub duration_min: f64,
    pub instruction: String,
}

/// Legs and totals for one waypoint sequence.
///
/// Unit conversion (meters to kilometers, seconds to minutes) happens per
/// leg; rounding happens once, here, at the aggregation boundary: distance
/// to two decimals, duration to whole minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSummary {
    pub legs: Vec<RouteLeg>,
    pub total_distance_km: f64,
    pub total_duration_min: u32,
}

/// Aggregate outcome of one optimization run. Immutable once produced; the
/// engine keeps no reference to it after returning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Sum of leg distances in kilometers, rounded to two decimals.
    pub total_distance_km: f64,
    /// Sum of leg durations in whole minutes.
    pub total_duration_min: u32,
    pub order: RouteOrder,
    pub starting_point: Address,
    pub legs: Vec<RouteLeg>,
}

/// Requests a drivable path through `start` followed by `ordered_stops` in
/// one provider call and aggregates the response.
pub fn build_path(
    provider: &impl RouteProvider,
    start: &Coordinate,
    ordered_stops: &[Coordinate],
) -> Result<PathSummary, RoutingError> {
    let mut waypoints = Vec::with_capacity(ordered_stops.len() + 1);
    waypoints.push(*start);
    waypoints.extend_from_slice(ordered_stops);

    let provider_legs = provider.route(&waypoints)?;
    debug!(legs = provider_legs.len(), "aggregating route legs");

    let total_m: f64 = provider_legs.iter().map(|leg| leg.distance_m).sum();
    let total_s: f64 = provider_legs.iter().map(|leg| leg.duration_s).sum();

    let legs = provider_legs
        .into_iter()
        .map(|leg| RouteLeg {
            distance_km: leg.distance_m / 1000.0,
            duration_min: leg.duration_s / 60.0,
            instruction: leg.instruction,
        })
        .collect();

    Ok(PathSummary {
        legs,
        total_distance_km: (total_m / 10.0).round() / 100.0,
        total_duration_min: (total_s / 60.0).round() as u32,
    })
}
