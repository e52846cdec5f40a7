//! Nominatim HTTP adapter for address geocoding.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::coord::Coordinate;
use crate::error::GeocodeError;
use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying User-Agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "route-optimizer".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimClient {
    fn resolve(&self, text: &str) -> Result<Coordinate, GeocodeError> {
        debug_assert!(!text.trim().is_empty(), "blank address is a caller error");

        let url = format!("{}/search", self.config.base_url);
        debug!(address = text, "geocoding address");

        let hits = self
            .client
            .get(url)
            .query(&[("format", "json"), ("q", text), ("limit", "1")])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<SearchHit>>())
            .map_err(|err| {
                warn!(address = text, error = %err, "geocoding request failed");
                GeocodeError::ResolutionFailed(err.to_string())
            })?;

        match hits.into_iter().next() {
            Some(hit) => best_match(hit),
            None => Err(GeocodeError::NotFound),
        }
    }
}

/// A single match from the Nominatim search API. Coordinates arrive as
/// decimal strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

fn best_match(hit: SearchHit) -> Result<Coordinate, GeocodeError> {
    let lat = hit
        .lat
        .parse::<f64>()
        .map_err(|_| GeocodeError::ResolutionFailed(format!("unparseable latitude: {}", hit.lat)))?;
    let lon = hit
        .lon
        .parse::<f64>()
        .map_err(|_| GeocodeError::ResolutionFailed(format!("unparseable longitude: {}", hit.lon)))?;

    Coordinate::new(lat, lon).ok_or_else(|| {
        GeocodeError::ResolutionFailed(format!("coordinate out of range: {},{}", lat, lon))
    })
}
