//! OSRM HTTP adapter for drivable paths with turn-by-turn steps.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::coord::Coordinate;
use crate::error::RoutingError;
use crate::traits::{ProviderLeg, RouteProvider};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RouteProvider for OsrmClient {
    fn route(&self, waypoints: &[Coordinate]) -> Result<Vec<ProviderLeg>, RoutingError> {
        debug_assert!(waypoints.len() >= 2, "a route needs at least two waypoints");

        // OSRM wants lng,lat order.
        let coords = waypoints
            .iter()
            .map(|point| format!("{:.6},{:.6}", point.lng, point.lat))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/route/v1/{}/{}?overview=false&steps=true",
            self.config.base_url, self.config.profile, coords
        );
        debug!(waypoints = waypoints.len(), "requesting route");

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())
            .map_err(|err| {
                warn!(error = %err, "routing request failed");
                RoutingError::ServiceUnavailable(err.to_string())
            })?;

        legs_from_response(body)
    }
}

fn legs_from_response(body: OsrmRouteResponse) -> Result<Vec<ProviderLeg>, RoutingError> {
    if body.code != "Ok" {
        return Err(RoutingError::NoRouteFound);
    }

    let route = body.routes.into_iter().next().ok_or(RoutingError::NoRouteFound)?;

    Ok(route
        .legs
        .into_iter()
        .map(|leg| ProviderLeg {
            distance_m: leg.distance,
            duration_s: leg.duration,
            instruction: leg_instruction(&leg.steps),
        })
        .collect())
}

/// Renders one guidance line for a leg from its maneuver steps.
fn leg_instruction(steps: &[OsrmStep]) -> String {
    let parts: Vec<String> = steps.iter().map(step_instruction).collect();
    parts.join(", then ")
}

fn step_instruction(step: &OsrmStep) -> String {
    let action = match step.maneuver.kind.as_str() {
        "depart" => "Head out".to_string(),
        "arrive" => return "Arrive at destination".to_string(),
        "turn" | "end of road" | "fork" => match step.maneuver.modifier.as_deref() {
            Some(modifier) => format!("Turn {}", modifier),
            None => "Turn".to_string(),
        },
        "continue" => "Continue".to_string(),
        "merge" => "Merge".to_string(),
        "roundabout" | "rotary" => "Take the roundabout".to_string(),
        other => {
            let mut text = other.to_string();
            if let Some(first) = text.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            text
        }
    };

    if step.name.is_empty() {
        action
    } else {
        format!("{} onto {}", action, step.name)
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    legs: Vec<OsrmLeg>,
}

#[derive(Debug, Deserialize)]
struct OsrmLeg {
    /// Meters.
    distance: f64,
    /// Seconds.
    duration: f64,
    #[serde(default)]
    steps: Vec<OsrmStep>,
}

#[derive(Debug, Deserialize)]
struct OsrmStep {
    #[serde(default)]
    name: String,
    maneuver: OsrmManeuver,
}

#[derive(Debug, Deserialize)]
struct OsrmManeuver {
    #[serde(rename = "type")]
    kind: String,
    modifier: Option<String>,
}
