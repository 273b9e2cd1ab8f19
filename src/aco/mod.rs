//! Ant System solver for the symmetric TSP.
//!
//! Users supply a validated [`DistanceMatrix`](crate::distance::DistanceMatrix)
//! and an [`AcoConfig`]; [`AcoRunner`] drives the construction/update loop
//! and returns the best tour found as an [`AcoResult`].
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Colony size, exponents, rates, seed, parallelism
//! - [`AcoRunner`]: Executes the iteration loop
//! - [`AcoResult`]: Best tour, length, and run statistics
//! - [`IterationStats`]: Per-iteration values passed to observers
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1)
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*, MIT Press

mod config;
mod runner;

pub use config::AcoConfig;
pub use runner::{AcoResult, AcoRunner, IterationStats};
