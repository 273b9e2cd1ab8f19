//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.
//!
//! Simulated ants build closed tours city by city, choosing each next city
//! with probability proportional to `tau^alpha * eta^beta`, where `tau` is
//! the pheromone trail on the edge and `eta = 1 / distance` its static
//! desirability. After every iteration each ant deposits pheromone
//! inversely proportional to its tour length, and then all trails
//! evaporate.
//!
//! - [`distance`]: Validated distance matrix and inverse-distance heuristic
//! - [`pheromone`]: Trail matrix with deposit/evaporate and the per-iteration
//!   update engine
//! - [`construct`]: Roulette-wheel tour construction for a single ant
//! - [`aco`]: Configuration, the iteration loop, and results
//!
//! # Example
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner};
//! use u_aco::distance::DistanceMatrix;
//!
//! let distances = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 10.0, 15.0, 20.0, 25.0],
//!     vec![10.0, 0.0, 35.0, 25.0, 30.0],
//!     vec![15.0, 35.0, 0.0, 30.0, 10.0],
//!     vec![20.0, 25.0, 30.0, 0.0, 35.0],
//!     vec![25.0, 30.0, 10.0, 35.0, 0.0],
//! ])?;
//!
//! let config = AcoConfig::default().with_max_iterations(100).with_seed(42);
//! let result = AcoRunner::run(&distances, &config)?;
//! assert!(result.best_length >= 95.0);
//! # Ok::<(), u_aco::AcoError>(())
//! ```
//!
//! # Concurrency
//!
//! Ants of one iteration only read the trail matrix and are built in
//! parallel with rayon (feature `parallel`, on by default). Each ant draws
//! from its own seeded stream, so results do not depend on scheduling.
//!
//! # Logging
//!
//! Progress is reported through [`tracing`]; install a subscriber to see it.

pub mod aco;
pub mod construct;
pub mod distance;
mod error;
pub mod pheromone;
pub mod random;
mod tour;

pub use error::{AcoError, InputError};
pub use tour::Tour;
