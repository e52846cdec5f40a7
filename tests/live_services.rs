//! Integration tests against the public Nominatim and OSRM instances.
//!
//! Ignored by default: they need network access and are subject to the
//! public services' rate limits. Run with `cargo test -- --ignored`.

mod fixtures;

use route_optimizer::nominatim::{NominatimClient, NominatimConfig};
use route_optimizer::orchestrator::RouteOptimizer;
use route_optimizer::osrm::{OsrmClient, OsrmConfig};
use route_optimizer::traits::Geocoder;

use fixtures::delhi_locations::{DEPOTS, STOPS};

fn nominatim() -> NominatimClient {
    NominatimClient::new(NominatimConfig::default()).expect("build geocoding client")
}

fn osrm() -> OsrmClient {
    OsrmClient::new(OsrmConfig::default()).expect("build routing client")
}

#[test]
#[ignore]
fn nominatim_resolves_a_known_landmark() {
    let coord = nominatim()
        .resolve("India Gate, New Delhi")
        .expect("landmark should geocode");

    // Within ~5km of the fixture coordinate.
    assert!(coord.haversine_km(&DEPOTS[1].coord()) < 5.0);
}

#[test]
#[ignore]
fn full_pipeline_against_live_services() {
    let optimizer = RouteOptimizer::new(nominatim(), osrm());

    let names: Vec<String> = STOPS.iter().take(3).map(|s| s.name.to_string()).collect();
    let outcome = optimizer
        .optimize(DEPOTS[0].name, &names)
        .expect("live run should succeed");

    let route = &outcome.route;
    assert_eq!(route.legs.len(), 3);
    assert!(route.total_distance_km > 0.0);
    assert!(route.total_duration_min > 0);
    assert!(route.legs.iter().all(|leg| !leg.instruction.is_empty()));

    let leg_km: f64 = route.legs.iter().map(|leg| leg.distance_km).sum();
    assert!((route.total_distance_km - leg_km).abs() < 0.005);
}
