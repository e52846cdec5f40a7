//! Visiting-order construction: anchored nearest-neighbor heuristic.
//!
//! Greedy and deterministic, no improvement pass. O(n^2) in the number of
//! stops, which is fine at the tens-of-stops scale this engine serves.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// A permutation of stop indices: the order in which the stops are visited.
/// Indices are 0-based positions in the resolved-stop list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteOrder {
    indices: Vec<usize>,
}

impl RouteOrder {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Orders `stops` by repeatedly moving to the nearest unvisited stop,
/// starting from `start`.
///
/// Ties break toward the lowest input index, so identical input always
/// yields an identical order. The first element is therefore the stop
/// nearest the starting point, not necessarily the best first leg of an
/// optimal tour.
pub fn sequence(start: &Coordinate, stops: &[Coordinate]) -> RouteOrder {
    if stops.is_empty() {
        return RouteOrder { indices: Vec::new() };
    }
    if stops.len() == 1 {
        return RouteOrder { indices: vec![0] };
    }

    let n = stops.len();
    let mut visited = vec![false; n];
    let mut indices = Vec::with_capacity(n);

    let mut current = *start;
    for _ in 0..n {
        let mut best: Option<(usize, f64)> = None;
        for (candidate, stop) in stops.iter().enumerate() {
            if visited[candidate] {
                continue;
            }
            let dist = current.haversine_km(stop);
            // Strict < keeps the lowest index on ties.
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((candidate, dist));
            }
        }

        let (next, _) = best.unwrap();
        visited[next] = true;
        indices.push(next);
        current = stops[next];
    }

    RouteOrder { indices }
}
