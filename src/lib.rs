//! route-optimizer core
//!
//! Single-vehicle collection-route engine: geocode free-text stop addresses,
//! order them with a nearest-neighbor heuristic anchored at a starting point,
//! and fetch a drivable path with turn-by-turn guidance for that order.

pub mod aggregator;
pub mod coord;
pub mod error;
pub mod export;
pub mod nominatim;
pub mod orchestrator;
pub mod osrm;
pub mod registry;
pub mod sequencer;
pub mod traits;
