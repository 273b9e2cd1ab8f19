//! Roulette-wheel choice of the next city.
//!
//! This is the only place where randomness influences a tour. The random
//! draw is passed in as a plain `f64`, so the choice itself is a pure
//! function of its arguments and can be driven by fixed values in tests.

use crate::distance::HeuristicMatrix;
use crate::pheromone::PheromoneMatrix;

/// Outcome of one next-city choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Chosen by sampling proportional to `tau^alpha * eta^beta`.
    Sampled(usize),
    /// The weights did not form a usable distribution (all zero, not
    /// finite, or the scan never crossed the threshold); the city was
    /// picked deterministically instead.
    Fallback(usize),
}

impl Selection {
    pub fn city(self) -> usize {
        match self {
            Selection::Sampled(city) | Selection::Fallback(city) => city,
        }
    }

    pub fn is_degenerate(self) -> bool {
        matches!(self, Selection::Fallback(_))
    }
}

/// Unnormalized desirability `tau^alpha * eta^beta` of an edge.
#[inline]
pub fn edge_weight(tau: f64, eta: f64, alpha: f64, beta: f64) -> f64 {
    tau.powf(alpha) * eta.powf(beta)
}

/// Picks the next city from `current` among cities with `visited[x] == false`.
///
/// `draw` must be uniform in `[0, 1)`. The threshold `draw * total` is
/// compared against the running sum of weights in city index order and the
/// first city whose cumulative weight exceeds it is selected, so zero-weight
/// cities are never sampled.
///
/// Degenerate distributions never fail:
///
/// - total weight zero (or NaN): the lowest-index unvisited city,
/// - total weight infinite: the lowest-index city with infinite weight,
/// - the running sum never exceeds the threshold (a `draw` outside
///   `[0, 1)`): the last city with positive weight.
///
/// Returns `None` only when every city has been visited.
pub fn select_next_city(
    current: usize,
    visited: &[bool],
    pheromone: &PheromoneMatrix,
    heuristic: &HeuristicMatrix,
    alpha: f64,
    beta: f64,
    draw: f64,
) -> Option<Selection> {
    let candidates: Vec<(usize, f64)> = visited
        .iter()
        .enumerate()
        .filter(|&(_, &seen)| !seen)
        .map(|(city, _)| {
            let w = edge_weight(
                pheromone.get(current, city),
                heuristic.get(current, city),
                alpha,
                beta,
            );
            (city, w)
        })
        .collect();

    let first = candidates.first()?.0;
    let total: f64 = candidates.iter().map(|&(_, w)| w).sum();

    if total.is_infinite() {
        let city = candidates
            .iter()
            .find(|&&(_, w)| w.is_infinite())
            .map_or(first, |&(city, _)| city);
        return Some(Selection::Fallback(city));
    }
    if total.is_nan() || total <= 0.0 {
        return Some(Selection::Fallback(first));
    }

    let threshold = draw * total;
    let mut cumulative = 0.0;
    for &(city, w) in &candidates {
        cumulative += w;
        if cumulative > threshold {
            return Some(Selection::Sampled(city));
        }
    }

    let last_positive = candidates
        .iter()
        .rev()
        .find(|&&(_, w)| w > 0.0)
        .map_or(first, |&(city, _)| city);
    Some(Selection::Fallback(last_positive))
}
