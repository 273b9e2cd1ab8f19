//! ACO configuration.

use crate::error::{AcoError, InputError};

/// Configuration for the Ant System solver.
///
/// # Defaults
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 10);
/// assert_eq!(config.max_iterations, 100);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_evaporation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcoConfig {
    /// Number of ants constructing a tour each iteration. Must be at least 1.
    pub num_ants: usize,

    /// Number of construction + update iterations.
    ///
    /// With 0 no ant runs and the result holds the identity tour.
    pub max_iterations: usize,

    /// Pheromone exponent `alpha` (>= 0). Higher values follow trails harder.
    pub alpha: f64,

    /// Heuristic exponent `beta` (>= 0). Higher values prefer short edges.
    pub beta: f64,

    /// Evaporation rate `rho` in `[0, 1]`.
    ///
    /// `1.0` wipes every trail after each iteration, which is valid but
    /// leaves construction to the deterministic fallback whenever
    /// `alpha > 0`.
    pub evaporation_rate: f64,

    /// Deposit numerator `Q` (> 0). Each ant adds `Q / length` per edge.
    pub deposit_rate: f64,

    /// Initial trail `tau0` on every edge (> 0).
    pub initial_pheromone: f64,

    /// Whether to construct ant tours in parallel using rayon.
    ///
    /// Results are identical either way. Ignored without the `parallel`
    /// feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked between iterations only, so the last started iteration
    /// always completes.
    pub time_limit_ms: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            max_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.1,
            deposit_rate: 1.0,
            initial_pheromone: 0.1,
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl AcoConfig {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    pub fn with_deposit_rate(mut self, q: f64) -> Self {
        self.deposit_rate = q;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Unlike the builder setters, nothing is clamped: out-of-range values
    /// are reported as [`AcoError::InvalidInput`].
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.num_ants < 1 {
            return Err(InputError::parameter("num_ants", "must be at least 1").into());
        }
        non_negative("alpha", self.alpha)?;
        non_negative("beta", self.beta)?;
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(InputError::parameter(
                "evaporation_rate",
                format!("must be in [0, 1], got {}", self.evaporation_rate),
            )
            .into());
        }
        positive("deposit_rate", self.deposit_rate)?;
        positive("initial_pheromone", self.initial_pheromone)?;
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), AcoError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::parameter(name, format!("must be finite and >= 0, got {value}")).into())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), AcoError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InputError::parameter(name, format!("must be finite and > 0, got {value}")).into())
    }
}
