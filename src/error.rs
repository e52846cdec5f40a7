//! Failure taxonomy for the optimization engine.
//!
//! Every failure surfaces as a typed result from the public operations;
//! nothing is swallowed into a degraded default route.

use thiserror::Error;

/// Per-address geocoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The service answered but found no match. Terminal for that address
    /// within the run.
    #[error("no match found for address")]
    NotFound,
    /// Transport or service failure. Retryable by re-issuing the resolution
    /// pass.
    #[error("geocoding request failed: {0}")]
    ResolutionFailed(String),
}

/// Input problems the caller must correct; never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing starting point address")]
    MissingStartingPoint,
    #[error("no stop addresses provided")]
    NoStops,
    #[error("no stop address resolved to a coordinate")]
    NoValidStops,
    #[error("starting point address could not be resolved")]
    InvalidStartingPoint,
}

/// Failure from the road-routing provider. No fallback route is synthesized;
/// the caller may retry the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("no drivable route found through the requested waypoints")]
    NoRouteFound,
    #[error("routing service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Typed failure of a full `optimize` run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Routing(#[from] RoutingError),
    /// A prior run on this optimizer instance is still in flight; wait for it
    /// or cancel it before starting another.
    #[error("an optimization run is already in progress")]
    Busy,
}
