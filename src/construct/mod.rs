//! Tour construction by simulated ants.
//!
//! Each ant starts at a random city and repeatedly moves to an unvisited
//! city chosen by roulette-wheel sampling over `tau^alpha * eta^beta`
//! (see [`select_next_city`]). Construction only reads the pheromone and
//! heuristic matrices.

mod constructor;
mod selection;

pub use constructor::{ConstructedTour, TourConstructor};
pub use selection::{edge_weight, select_next_city, Selection};
