//! ACO iteration loop.
//!
//! [`AcoRunner`] alternates two phases per iteration:
//! construction (every ant builds a tour from the current trails, possibly
//! in parallel) → update (best-tour tracking, then deposit and evaporation).

use super::config::AcoConfig;
use crate::construct::{ConstructedTour, TourConstructor};
use crate::distance::{DistanceMatrix, HeuristicMatrix};
use crate::error::AcoError;
use crate::pheromone::{PheromoneMatrix, PheromoneUpdate};
use crate::random::{create_rng, derive_ant_seeds};
use crate::tour::Tour;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Statistics for one completed iteration, passed to the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,

    /// Best length found so far, this iteration included.
    pub best_length: f64,

    /// Shortest tour among this iteration's ants.
    pub iteration_best_length: f64,

    /// Mean tour length among this iteration's ants.
    pub mean_length: f64,
}

/// Result of an ACO run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The shortest tour found.
    pub best_tour: Tour,

    /// Closed length of `best_tour`.
    pub best_length: f64,

    /// Number of completed iterations.
    pub iterations: usize,

    /// Iteration (1-based) that produced `best_tour`; 0 if no ant ran.
    pub best_iteration: usize,

    /// Whether the run was stopped by the cancellation flag.
    pub cancelled: bool,

    /// Whether the run was stopped by `time_limit_ms`.
    pub timed_out: bool,

    /// Best length at the end of each iteration.
    pub length_history: Vec<f64>,

    /// Selections that used the deterministic fallback, over all ants.
    pub degenerate_selections: usize,

    /// Master seed the run used (the configured one, or the drawn one).
    pub seed: u64,
}

/// Executes the Ant System loop.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner};
/// use u_aco::distance::DistanceMatrix;
///
/// let distances = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])
/// .expect("valid matrix");
///
/// let config = AcoConfig::default().with_seed(42);
/// let result = AcoRunner::run(&distances, &config).expect("valid config");
/// assert_eq!(result.best_tour.len(), 4);
/// assert_eq!(result.best_length, 80.0);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO for `config.max_iterations` iterations.
    ///
    /// Returns [`AcoError::InvalidInput`] if the configuration is invalid;
    /// nothing is simulated in that case.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(distances, config, None, |_| {})
    }

    /// Runs ACO with an optional cancellation token.
    ///
    /// If `cancel` is set to `true`, the run stops before the next
    /// iteration starts and returns the best tour found so far.
    pub fn run_with_cancel(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(distances, config, cancel, |_| {})
    }

    /// Runs ACO, calling `on_iteration` after every completed iteration.
    pub fn run_with_observer<F>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut on_iteration: F,
    ) -> Result<AcoResult, AcoError>
    where
        F: FnMut(&IterationStats),
    {
        config.validate()?;

        let n = distances.size();
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        let heuristic = HeuristicMatrix::new(distances);
        let mut pheromone = PheromoneMatrix::new(n, config.initial_pheromone);
        let update = PheromoneUpdate::new(config.deposit_rate, config.evaporation_rate);

        info!(
            cities = n,
            ants = config.num_ants,
            max_iterations = config.max_iterations,
            seed,
            parallel = config.parallel,
            "aco solve start"
        );

        let mut best_tour = Tour::identity(n);
        let mut best_length = f64::INFINITY;
        let mut best_iteration = 0usize;
        let mut length_history = Vec::new();
        let mut degenerate_selections = 0usize;
        let mut iterations = 0usize;
        let mut cancelled = false;
        let mut timed_out = false;
        let started = Instant::now();

        for iteration in 1..=config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if started.elapsed().as_millis() >= u128::from(limit) {
                    timed_out = true;
                    break;
                }
            }

            // Construction phase: shared borrows only.
            let seeds = derive_ant_seeds(&mut rng, config.num_ants);
            let ctor =
                TourConstructor::new(distances, &heuristic, &pheromone, config.alpha, config.beta);
            let ants = construct_ants(&ctor, &seeds, config.parallel);

            // Update phase: best tracking, then the single exclusive write.
            let mut iteration_best = f64::INFINITY;
            let mut total_length = 0.0;
            for ant in &ants {
                total_length += ant.length;
                iteration_best = iteration_best.min(ant.length);
                degenerate_selections += ant.degenerate_selections;
                if best_iteration == 0 || ant.length < best_length {
                    best_tour = ant.tour.clone();
                    best_length = ant.length;
                    best_iteration = iteration;
                    debug!(iteration, length = best_length, "new best tour");
                }
            }
            update.apply(&mut pheromone, &ants);

            iterations = iteration;
            length_history.push(best_length);

            let stats = IterationStats {
                iteration,
                best_length,
                iteration_best_length: iteration_best,
                mean_length: total_length / ants.len() as f64,
            };
            trace!(
                iteration,
                iteration_best = stats.iteration_best_length,
                mean = stats.mean_length,
                pheromone_version = pheromone.version(),
                tau_bounds = ?pheromone.bounds(),
                "iteration complete"
            );
            on_iteration(&stats);
        }

        if best_iteration == 0 {
            best_length = best_tour.length(distances);
        }

        info!(
            best_length,
            iterations, cancelled, timed_out, degenerate_selections, "aco solve end"
        );

        Ok(AcoResult {
            best_tour,
            best_length,
            iterations,
            best_iteration,
            cancelled,
            timed_out,
            length_history,
            degenerate_selections,
            seed,
        })
    }
}

/// Builds one tour per seed. Output order follows `seeds` in both modes.
#[cfg(feature = "parallel")]
fn construct_ants(
    ctor: &TourConstructor<'_>,
    seeds: &[u64],
    parallel: bool,
) -> Vec<ConstructedTour> {
    if parallel {
        seeds
            .par_iter()
            .map(|&seed| ctor.construct(&mut create_rng(seed)))
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| ctor.construct(&mut create_rng(seed)))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn construct_ants(
    ctor: &TourConstructor<'_>,
    seeds: &[u64],
    _parallel: bool,
) -> Vec<ConstructedTour> {
    seeds
        .iter()
        .map(|&seed| ctor.construct(&mut create_rng(seed)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
