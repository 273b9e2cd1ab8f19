//! Distance and heuristic matrices.
//!
//! [`DistanceMatrix`] is the validated problem input; [`HeuristicMatrix`]
//! caches the inverse-distance desirability derived from it.

mod heuristic;
mod matrix;

pub use heuristic::HeuristicMatrix;
pub use matrix::{DistanceMatrix, DEFAULT_SYMMETRY_TOLERANCE};
