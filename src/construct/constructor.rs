//! Single-ant tour construction.

use super::selection::select_next_city;
use crate::distance::{DistanceMatrix, HeuristicMatrix};
use crate::pheromone::PheromoneMatrix;
use crate::tour::Tour;
use rand::Rng;
use tracing::trace;

/// One ant's completed tour.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructedTour {
    /// Visit order, a permutation of `0..n`.
    pub tour: Tour,
    /// Closed-tour length, including the edge back to the start.
    pub length: f64,
    /// How many steps used the deterministic fallback instead of sampling.
    pub degenerate_selections: usize,
}

/// Builds ant tours against a frozen pheromone snapshot.
///
/// Holds shared borrows only, so any number of ants can construct in
/// parallel from the same instance; the pheromone matrix cannot be updated
/// while a constructor borrowing it is alive.
#[derive(Debug, Clone, Copy)]
pub struct TourConstructor<'a> {
    distances: &'a DistanceMatrix,
    heuristic: &'a HeuristicMatrix,
    pheromone: &'a PheromoneMatrix,
    alpha: f64,
    beta: f64,
}

impl<'a> TourConstructor<'a> {
    pub fn new(
        distances: &'a DistanceMatrix,
        heuristic: &'a HeuristicMatrix,
        pheromone: &'a PheromoneMatrix,
        alpha: f64,
        beta: f64,
    ) -> Self {
        Self {
            distances,
            heuristic,
            pheromone,
            alpha,
            beta,
        }
    }

    /// Constructs one tour from a uniformly random start city.
    pub fn construct<R: Rng>(&self, rng: &mut R) -> ConstructedTour {
        let n = self.distances.size();
        let start = rng.random_range(0..n);
        self.construct_from(start, rng)
    }

    /// Constructs one tour from a fixed start city.
    pub fn construct_from<R: Rng>(&self, start: usize, rng: &mut R) -> ConstructedTour {
        let n = self.distances.size();
        let mut cities = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        let mut degenerate_selections = 0;

        cities.push(start);
        visited[start] = true;
        let mut current = start;

        while let Some(selection) = select_next_city(
            current,
            &visited,
            self.pheromone,
            self.heuristic,
            self.alpha,
            self.beta,
            rng.random_range(0.0..1.0),
        ) {
            if selection.is_degenerate() {
                degenerate_selections += 1;
                trace!(from = current, to = selection.city(), "degenerate selection");
            }
            current = selection.city();
            visited[current] = true;
            cities.push(current);
        }

        let tour = Tour::new(cities);
        let length = tour.length(self.distances);
        ConstructedTour {
            tour,
            length,
            degenerate_selections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn five_cities() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0, 25.0],
            vec![10.0, 0.0, 35.0, 25.0, 30.0],
            vec![15.0, 35.0, 0.0, 30.0, 10.0],
            vec![20.0, 25.0, 30.0, 0.0, 35.0],
            vec![25.0, 30.0, 10.0, 35.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_tour_is_permutation_with_matching_length() {
        let dm = five_cities();
        let eta = HeuristicMatrix::new(&dm);
        let tau = PheromoneMatrix::new(5, 0.1);
        let ctor = TourConstructor::new(&dm, &eta, &tau, 1.0, 2.0);
        let mut rng = create_rng(42);

        for _ in 0..50 {
            let ant = ctor.construct(&mut rng);
            assert!(ant.tour.is_permutation(5), "not a permutation: {:?}", ant.tour);
            assert_eq!(ant.length, dm.tour_length(ant.tour.cities()));
            assert_eq!(ant.degenerate_selections, 0);
        }
    }

    #[test]
    fn test_construct_from_fixed_start() {
        let dm = five_cities();
        let eta = HeuristicMatrix::new(&dm);
        let tau = PheromoneMatrix::new(5, 0.1);
        let ctor = TourConstructor::new(&dm, &eta, &tau, 1.0, 2.0);
        let ant = ctor.construct_from(3, &mut create_rng(1));
        assert_eq!(ant.tour.cities()[0], 3);
    }

    #[test]
    fn test_zero_pheromone_builds_index_order_tour() {
        let dm = five_cities();
        let eta = HeuristicMatrix::new(&dm);
        let mut tau = PheromoneMatrix::new(5, 0.1);
        tau.evaporate(1.0);
        let ctor = TourConstructor::new(&dm, &eta, &tau, 1.0, 2.0);

        let ant = ctor.construct_from(2, &mut create_rng(9));
        assert_eq!(ant.tour.cities(), &[2, 0, 1, 3, 4]);
        assert_eq!(ant.degenerate_selections, 4);
        assert_eq!(ant.length, dm.tour_length(&[2, 0, 1, 3, 4]));
    }

    #[test]
    fn test_same_rng_same_tour() {
        let dm = five_cities();
        let eta = HeuristicMatrix::new(&dm);
        let tau = PheromoneMatrix::new(5, 0.1);
        let ctor = TourConstructor::new(&dm, &eta, &tau, 1.0, 2.0);
        let a = ctor.construct(&mut create_rng(77));
        let b = ctor.construct(&mut create_rng(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_two_cities() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 4.5], vec![4.5, 0.0]]).expect("valid");
        let eta = HeuristicMatrix::new(&dm);
        let tau = PheromoneMatrix::new(2, 0.1);
        let ctor = TourConstructor::new(&dm, &eta, &tau, 1.0, 2.0);
        let ant = ctor.construct(&mut create_rng(5));
        assert!(ant.tour.is_permutation(2));
        assert_eq!(ant.length, 9.0);
    }

    proptest! {
        #[test]
        fn prop_random_instances_give_permutations(
            points in proptest::collection::vec((0.0_f64..100.0, 0.0_f64..100.0), 2..12),
            alpha in 0.0_f64..4.0,
            beta in 0.0_f64..6.0,
            seed in any::<u64>(),
        ) {
            // Random points may coincide; those instances are simply rejected.
            if let Ok(dm) = DistanceMatrix::from_points(&points) {
                let n = dm.size();
                let eta = HeuristicMatrix::new(&dm);
                let tau = PheromoneMatrix::new(n, 0.1);
                let ctor = TourConstructor::new(&dm, &eta, &tau, alpha, beta);
                let ant = ctor.construct(&mut create_rng(seed));
                prop_assert!(ant.tour.is_permutation(n));
                prop_assert!(ant.length > 0.0);
            }
        }
    }
}
