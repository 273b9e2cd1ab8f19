//! Closed tours over all cities.

use crate::distance::DistanceMatrix;

/// An ordered visit sequence over cities `0..n`.
///
/// The tour is closed: after the last city it returns to the first.
/// Tours produced by the solver are always permutations of `0..n`;
/// [`Tour::is_permutation`] checks this for arbitrary input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour(Vec<usize>);

impl Tour {
    pub fn new(cities: Vec<usize>) -> Self {
        Tour(cities)
    }

    /// The tour `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Tour((0..n).collect())
    }

    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    pub fn into_cities(self) -> Vec<usize> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive city pairs, including the closing edge back to the start.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.0.len();
        (0..n).map(move |i| (self.0[i], self.0[(i + 1) % n]))
    }

    /// Closed-tour length under `distances`.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        distances.tour_length(&self.0)
    }

    /// Returns `true` if every city in `0..n` appears exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.0 {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    /// Rotation and direction independent form: starts at city 0 and walks
    /// toward the smaller of its two neighbours.
    ///
    /// Two tours describing the same cycle have equal canonical forms.
    pub fn canonical(&self) -> Tour {
        let n = self.0.len();
        let Some(start) = self.0.iter().position(|&c| c == 0) else {
            return self.clone();
        };
        let mut forward: Vec<usize> = (0..n).map(|k| self.0[(start + k) % n]).collect();
        if n > 2 && forward[n - 1] < forward[1] {
            forward[1..].reverse();
        }
        Tour(forward)
    }
}

impl From<Vec<usize>> for Tour {
    fn from(cities: Vec<usize>) -> Self {
        Tour(cities)
    }
}
