//! Optimizer configuration.

/// Configuration for [`LoadOptimizer`](super::LoadOptimizer).
///
/// # Examples
///
/// ```
/// use u_loadpref::knapsack::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_max_table_cells(1_000_000)
///     .with_relaxation(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Upper bound on `(n + 1) * (capacity + 1)` DP table cells.
    ///
    /// The exact solver is `O(n * capacity)` in time and memory; larger
    /// instances are refused rather than allowed to exhaust memory.
    pub max_table_cells: usize,

    /// Whether to compute the LP relaxation bound alongside the DP bundle.
    pub solve_relaxation: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_table_cells: 50_000_000,
            solve_relaxation: true,
        }
    }
}

impl OptimizerConfig {
    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells;
        self
    }

    pub fn with_relaxation(mut self, enabled: bool) -> Self {
        self.solve_relaxation = enabled;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_table_cells == 0 {
            return Err("max_table_cells must be positive".into());
        }
        Ok(())
    }
}
