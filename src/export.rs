//! Serializable snapshot of a completed run, for download or persistence.
//!
//! The document shape is stable: `addresses`, `routeInfo` (with
//! `totalDistance`, `estimatedTime`, `optimizedOrder`, `startingPoint`) and
//! an RFC 3339 `timestamp`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::orchestrator::OptimizeOutcome;
use crate::registry::{Address, AddressId, Validity};
use crate::sequencer::RouteOrder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSnapshot {
    /// The resolved stop addresses, in the order the route indices refer to.
    pub addresses: Vec<ExportedAddress>,
    pub route_info: RouteInfo,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    /// Kilometers, two decimals.
    pub total_distance: f64,
    /// Whole minutes.
    pub estimated_time: u32,
    pub optimized_order: RouteOrder,
    pub starting_point: ExportedStart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedAddress {
    pub id: AddressId,
    pub address: String,
    /// (latitude, longitude), present once resolved.
    pub coordinates: Option<(f64, f64)>,
    pub is_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedStart {
    pub address: String,
    pub coordinates: Option<(f64, f64)>,
    pub is_valid: bool,
}

impl RouteSnapshot {
    /// Captures a completed run, stamped with the current time.
    pub fn capture(outcome: &OptimizeOutcome) -> Self {
        Self::with_timestamp(outcome, Utc::now())
    }

    pub fn with_timestamp(outcome: &OptimizeOutcome, timestamp: DateTime<Utc>) -> Self {
        let start = &outcome.route.starting_point;
        Self {
            addresses: outcome.stops.iter().map(exported).collect(),
            route_info: RouteInfo {
                total_distance: outcome.route.total_distance_km,
                estimated_time: outcome.route.total_duration_min,
                optimized_order: outcome.route.order.clone(),
                starting_point: ExportedStart {
                    address: start.text.clone(),
                    coordinates: start.coordinate.map(|c| (c.lat, c.lng)),
                    is_valid: start.validity == Validity::Valid,
                },
            },
            timestamp,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(document: &str) -> serde_json::Result<Self> {
        serde_json::from_str(document)
    }
}

fn exported(address: &Address) -> ExportedAddress {
    ExportedAddress {
        id: address.id(),
        address: address.text.clone(),
        coordinates: address.coordinate.map(|c| (c.lat, c.lng)),
        is_valid: address.validity == Validity::Valid,
    }
}
