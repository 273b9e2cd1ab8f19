//! Pheromone trail storage.

/// Mutable n×n trail-strength matrix.
///
/// Symmetric by construction: [`deposit`](Self::deposit) always updates
/// both directions of an edge and [`evaporate`](Self::evaporate) scales
/// every cell uniformly. Values never become negative since deposits are
/// non-negative and evaporation multiplies by `1 - rho` with
/// `rho` in `[0, 1]`.
///
/// The matrix carries a version that the update engine bumps once per
/// completed update phase, so observers can tell trail snapshots apart.
///
/// # Examples
///
/// ```
/// use u_aco::pheromone::PheromoneMatrix;
///
/// let mut tau = PheromoneMatrix::new(3, 0.1);
/// tau.deposit(0, 2, 0.4);
/// assert!((tau.get(2, 0) - 0.5).abs() < 1e-12);
///
/// tau.evaporate(0.5);
/// assert!((tau.get(0, 2) - 0.25).abs() < 1e-12);
/// assert!((tau.get(0, 1) - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
    version: u64,
}

impl PheromoneMatrix {
    /// Allocates an `n × n` matrix with `initial` on every off-diagonal cell.
    pub fn new(size: usize, initial: f64) -> Self {
        let mut data = vec![initial; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self {
            data,
            size,
            version: 0,
        }
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of completed update phases applied to this matrix.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Adds `amount` to the trail on edge `(i, j)` in both directions.
    pub fn deposit(&mut self, i: usize, j: usize, amount: f64) {
        debug_assert!(amount >= 0.0, "deposit must be non-negative, got {amount}");
        self.data[i * self.size + j] += amount;
        if i != j {
            self.data[j * self.size + i] += amount;
        }
    }

    /// Multiplies every cell by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        debug_assert!((0.0..=1.0).contains(&rho), "rho must be in [0, 1], got {rho}");
        let keep = 1.0 - rho;
        for tau in &mut self.data {
            *tau *= keep;
        }
    }

    /// Smallest and largest off-diagonal trail values.
    pub fn bounds(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for i in 0..self.size {
            for j in 0..self.size {
                if i != j {
                    let tau = self.get(i, j);
                    lo = lo.min(tau);
                    hi = hi.max(tau);
                }
            }
        }
        (lo, hi)
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }
}
