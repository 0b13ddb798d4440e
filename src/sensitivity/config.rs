//! Capacity sweep configuration.

/// Range of capacities to sweep.
///
/// Capacities are `start_w, start_w + step_w, ...` strictly below `stop_w`.
///
/// # Examples
///
/// ```
/// use u_loadpref::sensitivity::SweepConfig;
///
/// let config = SweepConfig::around_capacity(1000.0);
/// assert_eq!(
///     config.capacities(),
///     vec![200.0, 400.0, 600.0, 800.0, 1000.0, 1200.0, 1400.0, 1600.0]
/// );
///
/// let custom = SweepConfig::default()
///     .with_range(500.0, 3000.0)
///     .with_step(500.0)
///     .with_parallel(false);
/// assert_eq!(custom.capacities().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// First capacity (W).
    pub start_w: f64,

    /// Exclusive upper end (W).
    pub stop_w: f64,

    /// Increment between capacities (W).
    pub step_w: f64,

    /// Whether to solve capacity steps in parallel using rayon.
    ///
    /// Only takes effect when the crate is built with the `parallel`
    /// feature. Results are identical either way.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_w: 200.0,
            stop_w: 10_000.0,
            step_w: 200.0,
            parallel: true,
        }
    }
}

impl SweepConfig {
    /// 200 W steps from 200 W up to (excluding) `capacity_w + 800` W, so
    /// the curve runs a little past the operator's budget.
    pub fn around_capacity(capacity_w: f64) -> Self {
        Self {
            stop_w: capacity_w + 800.0,
            ..Self::default()
        }
    }

    pub fn with_range(mut self, start_w: f64, stop_w: f64) -> Self {
        self.start_w = start_w;
        self.stop_w = stop_w;
        self
    }

    pub fn with_step(mut self, step_w: f64) -> Self {
        self.step_w = step_w;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The swept capacities, in increasing order.
    pub fn capacities(&self) -> Vec<f64> {
        if self.validate().is_err() {
            return Vec::new();
        }
        (0u64..)
            .map(|k| self.start_w + k as f64 * self.step_w)
            .take_while(|&c| c < self.stop_w)
            .collect()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.start_w.is_finite() || !self.stop_w.is_finite() || !self.step_w.is_finite() {
            return Err("sweep bounds must be finite".into());
        }
        if self.start_w <= 0.0 {
            return Err(format!("start_w must be positive, got {}", self.start_w));
        }
        if self.step_w <= 0.0 {
            return Err(format!("step_w must be positive, got {}", self.step_w));
        }
        if self.stop_w <= self.start_w {
            return Err(format!(
                "stop_w ({}) must exceed start_w ({})",
                self.stop_w, self.start_w
            ));
        }
        Ok(())
    }
}
