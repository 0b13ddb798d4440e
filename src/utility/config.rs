//! Rank-to-utility scale configuration.

/// Endpoints of the linear rank-to-utility mapping.
///
/// The least-preferred device receives `floor` rather than zero so that
/// utility-per-watt ratios downstream never collapse to "no value".
///
/// # Examples
///
/// ```
/// use u_loadpref::utility::ScaleConfig;
///
/// let scale = ScaleConfig::default().with_floor(1.0);
/// assert!(scale.validate().is_ok());
/// assert!(ScaleConfig::default().with_floor(150.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleConfig {
    /// Utility of the top-ranked device.
    pub top: f64,

    /// Utility of the bottom-ranked device.
    pub floor: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            top: 100.0,
            floor: 0.1,
        }
    }
}

impl ScaleConfig {
    pub fn with_top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.top.is_finite() || !self.floor.is_finite() {
            return Err("scale endpoints must be finite".into());
        }
        if self.floor < 0.0 {
            return Err(format!("floor must be non-negative, got {}", self.floor));
        }
        if self.floor >= self.top {
            return Err(format!(
                "floor ({}) must be below top ({})",
                self.floor, self.top
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        let scale = ScaleConfig::default();
        assert!((scale.top - 100.0).abs() < 1e-12);
        assert!((scale.floor - 0.1).abs() < 1e-12);
        assert!(scale.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_floor() {
        assert!(ScaleConfig::default().with_floor(-0.5).validate().is_err());
    }

    #[test]
    fn test_validate_inverted_range() {
        let scale = ScaleConfig::default().with_top(10.0).with_floor(10.0);
        assert!(scale.validate().is_err());
    }

    #[test]
    fn test_validate_non_finite() {
        assert!(ScaleConfig::default().with_top(f64::NAN).validate().is_err());
    }
}
