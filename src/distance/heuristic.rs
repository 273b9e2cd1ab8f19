//! Inverse-distance heuristic desirability.

use super::matrix::DistanceMatrix;

/// Static edge desirability `eta(i, j) = 1 / distance(i, j)`.
///
/// Computed once from a validated [`DistanceMatrix`]; off-diagonal values
/// are therefore strictly positive and finite. The diagonal holds `0.0`
/// and is never read by tour construction.
#[derive(Debug, Clone)]
pub struct HeuristicMatrix {
    data: Vec<f64>,
    size: usize,
}

impl HeuristicMatrix {
    pub fn new(distances: &DistanceMatrix) -> Self {
        let size = distances.size();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for (j, &d) in distances.row(i).iter().enumerate() {
                if i != j {
                    data[i * size + j] = 1.0 / d;
                }
            }
        }
        Self { data, size }
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }
}
