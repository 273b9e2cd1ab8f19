//! Per-iteration pheromone update: deposit, then evaporate.

use super::matrix::PheromoneMatrix;
use crate::construct::ConstructedTour;

/// Folds one iteration's ant tours into the pheromone matrix.
///
/// The order is fixed: every ant first deposits `deposit_rate / length`
/// on each edge of its tour (closing edge included, both directions),
/// and only then is the whole matrix evaporated once by `1 - rho`.
/// Taking `&mut PheromoneMatrix` for the whole call keeps the sequence
/// indivisible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PheromoneUpdate {
    /// Numerator of the per-edge deposit (`Q`).
    pub deposit_rate: f64,
    /// Evaporation rate `rho` in `[0, 1]`.
    pub evaporation_rate: f64,
}

impl PheromoneUpdate {
    pub fn new(deposit_rate: f64, evaporation_rate: f64) -> Self {
        Self {
            deposit_rate,
            evaporation_rate,
        }
    }

    /// Applies deposit and evaporation for one iteration.
    pub fn apply(&self, pheromone: &mut PheromoneMatrix, tours: &[ConstructedTour]) {
        for ant in tours {
            let delta = self.deposit_rate / ant.length;
            for (from, to) in ant.tour.edges() {
                pheromone.deposit(from, to, delta);
            }
        }
        pheromone.evaporate(self.evaporation_rate);
        pheromone.bump_version();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::Tour;

    fn ant(cities: Vec<usize>, length: f64) -> ConstructedTour {
        ConstructedTour {
            tour: Tour::new(cities),
            length,
            degenerate_selections: 0,
        }
    }

    #[test]
    fn test_deposit_then_evaporate() {
        let mut tau = PheromoneMatrix::new(3, 0.1);
        let update = PheromoneUpdate::new(1.0, 0.5);

        update.apply(&mut tau, &[ant(vec![0, 1, 2], 4.0)]);

        // Every edge of a 3-city tour is used: (0.1 + 1/4) * 0.5
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            assert!((tau.get(i, j) - 0.175).abs() < 1e-12);
            assert!((tau.get(j, i) - 0.175).abs() < 1e-12);
        }
        assert_eq!(tau.version(), 1);
    }

    #[test]
    fn test_deposits_accumulate_across_ants() {
        let mut tau = PheromoneMatrix::new(4, 0.0);
        let update = PheromoneUpdate::new(2.0, 0.0);

        update.apply(
            &mut tau,
            &[ant(vec![0, 1, 2, 3], 10.0), ant(vec![0, 2, 1, 3], 20.0)],
        );

        // (1,2) is shared: 2/10 + 2/20
        assert!((tau.get(1, 2) - 0.3).abs() < 1e-12);
        // (0,1) only in the first tour
        assert!((tau.get(0, 1) - 0.2).abs() < 1e-12);
        // (0,2) only in the second tour
        assert!((tau.get(2, 0) - 0.1).abs() < 1e-12);
        // closing edge (3,0) in both tours
        assert!((tau.get(0, 3) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_shorter_tours_deposit_more() {
        let mut short = PheromoneMatrix::new(3, 0.0);
        let mut long = PheromoneMatrix::new(3, 0.0);
        let update = PheromoneUpdate::new(1.0, 0.1);

        update.apply(&mut short, &[ant(vec![0, 1, 2], 5.0)]);
        update.apply(&mut long, &[ant(vec![0, 1, 2], 50.0)]);

        assert!(short.get(0, 1) > long.get(0, 1));
    }

    #[test]
    fn test_empty_batch_only_evaporates() {
        let mut tau = PheromoneMatrix::new(3, 1.0);
        PheromoneUpdate::new(1.0, 0.25).apply(&mut tau, &[]);
        assert!((tau.get(0, 1) - 0.75).abs() < 1e-12);
        assert_eq!(tau.version(), 1);
    }
}
