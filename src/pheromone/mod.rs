//! Pheromone model and its update engine.
//!
//! [`PheromoneMatrix`] holds the shared trail state. During tour
//! construction it is only ever borrowed immutably; [`PheromoneUpdate`]
//! takes the single exclusive borrow per iteration to deposit and
//! evaporate.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

mod matrix;
mod update;

pub use matrix::PheromoneMatrix;
pub use update::PheromoneUpdate;
