//! Stop registry: owns the session's address list and resolution state.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coord::Coordinate;
use crate::error::{GeocodeError, ValidationError};
use crate::traits::Geocoder;

/// Opaque identifier for an address within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(u64);

/// Resolution state of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validity {
    Unresolved,
    Valid,
    Invalid,
}

/// A free-text address plus whatever resolution has established about it.
///
/// Only the resolution pass sets the coordinate and validity; editing the
/// text resets both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    id: AddressId,
    pub text: String,
    pub coordinate: Option<Coordinate>,
    pub validity: Validity,
}

impl Address {
    fn new(id: AddressId, text: String) -> Self {
        Self {
            id,
            text,
            coordinate: None,
            validity: Validity::Unresolved,
        }
    }

    pub fn id(&self) -> AddressId {
        self.id
    }
}

/// A stop excluded from the run because its address did not geocode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedStop {
    pub text: String,
    pub reason: GeocodeError,
}

/// Snapshot produced by a successful resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub starting_point: Address,
    /// Stops that resolved, in registry order.
    pub stops: Vec<Address>,
    /// Stops excluded this run, reported so the caller can surface them.
    pub dropped: Vec<DroppedStop>,
}

/// Mutable list of input addresses for one session: a starting point plus
/// collection stops.
#[derive(Debug, Clone, Default)]
pub struct StopRegistry {
    next_id: u64,
    starting_point: Option<Address>,
    stops: Vec<Address>,
}

impl StopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty stop entry and returns its id.
    pub fn add_stop(&mut self) -> AddressId {
        let id = AddressId(self.next_id);
        self.next_id += 1;
        self.stops.push(Address::new(id, String::new()));
        id
    }

    /// Removes a stop. Returns false if the id is unknown.
    pub fn remove_stop(&mut self, id: AddressId) -> bool {
        let before = self.stops.len();
        self.stops.retain(|stop| stop.id != id);
        self.stops.len() != before
    }

    /// Replaces a stop's text, resetting its resolution state. Returns false
    /// if the id is unknown.
    pub fn set_address_text(&mut self, id: AddressId, text: impl Into<String>) -> bool {
        match self.stops.iter_mut().find(|stop| stop.id == id) {
            Some(stop) => {
                stop.text = text.into();
                stop.coordinate = None;
                stop.validity = Validity::Unresolved;
                true
            }
            None => false,
        }
    }

    /// Sets (or replaces) the starting point, resetting its resolution state.
    pub fn set_starting_point_text(&mut self, text: impl Into<String>) {
        let id = AddressId(self.next_id);
        self.next_id += 1;
        self.starting_point = Some(Address::new(id, text.into()));
    }

    pub fn starting_point(&self) -> Option<&Address> {
        self.starting_point.as_ref()
    }

    pub fn stops(&self) -> &[Address] {
        &self.stops
    }

    /// Entries whose address has resolved to a coordinate.
    pub fn list_resolved(&self) -> Vec<&Address> {
        self.stops
            .iter()
            .filter(|stop| stop.validity == Validity::Valid)
            .collect()
    }

    /// Geocodes the starting point and every non-blank stop, one lookup per
    /// distinct address text, in parallel. Each entry's coordinate and
    /// validity are updated in place; the returned snapshot carries only the
    /// usable addresses plus the stops that had to be dropped.
    pub fn resolve_all(&mut self, geocoder: &impl Geocoder) -> Result<Resolution, ValidationError> {
        let start_text = match &self.starting_point {
            Some(start) if !start.text.trim().is_empty() => start.text.trim().to_string(),
            _ => return Err(ValidationError::MissingStartingPoint),
        };

        let mut distinct: Vec<String> = vec![start_text.clone()];
        for stop in &self.stops {
            let text = stop.text.trim();
            if !text.is_empty() && !distinct.iter().any(|seen| seen == text) {
                distinct.push(text.to_string());
            }
        }

        debug!(lookups = distinct.len(), "resolving addresses");
        let lookups: HashMap<String, Result<Coordinate, GeocodeError>> = distinct
            .par_iter()
            .map(|text| (text.clone(), geocoder.resolve(text)))
            .collect();

        let mut valid_stops = Vec::new();
        let mut dropped = Vec::new();
        for stop in &mut self.stops {
            let text = stop.text.trim();
            if text.is_empty() {
                continue;
            }
            match &lookups[text] {
                Ok(coordinate) => {
                    stop.coordinate = Some(*coordinate);
                    stop.validity = Validity::Valid;
                    valid_stops.push(stop.clone());
                }
                Err(reason) => {
                    stop.coordinate = None;
                    stop.validity = Validity::Invalid;
                    dropped.push(DroppedStop {
                        text: stop.text.clone(),
                        reason: reason.clone(),
                    });
                }
            }
        }

        if valid_stops.is_empty() {
            return Err(ValidationError::NoValidStops);
        }

        let Some(start) = self.starting_point.as_mut() else {
            return Err(ValidationError::MissingStartingPoint);
        };
        match &lookups[&start_text] {
            Ok(coordinate) => {
                start.coordinate = Some(*coordinate);
                start.validity = Validity::Valid;
            }
            Err(_) => {
                start.coordinate = None;
                start.validity = Validity::Invalid;
                return Err(ValidationError::InvalidStartingPoint);
            }
        }

        Ok(Resolution {
            starting_point: start.clone(),
            stops: valid_stops,
            dropped,
        })
    }
}
