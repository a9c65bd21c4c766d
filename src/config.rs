//! Per-network training hyperparameters

use crate::error::{NetworkError, Result};

/// Default learning rate
pub const DEFAULT_ETA: f64 = 0.15;
/// Default momentum factor
pub const DEFAULT_ALPHA: f64 = 0.5;
/// Default window for the smoothed error
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 100.0;

/// Hyperparameters owned by a single network
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    /// Learning rate applied to each gradient step
    pub eta: f64,
    /// Fraction of the previous weight change carried into the next one
    pub alpha: f64,
    /// Number of past samples the recent average error roughly spans
    pub smoothing_factor: f64,
    /// Seed for weight initialization, `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            eta: DEFAULT_ETA,
            alpha: DEFAULT_ALPHA,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            seed: None,
        }
    }
}

impl NetworkConfig {
    /// Create a config with the default hyperparameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the learning rate
    pub fn eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    /// Set the momentum factor
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the smoothing window of the recent average error
    pub fn smoothing_factor(mut self, smoothing_factor: f64) -> Self {
        self.smoothing_factor = smoothing_factor;
        self
    }

    /// Use a fixed seed so weight initialization is reproducible
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every hyperparameter is usable
    pub fn validate(&self) -> Result<()> {
        check_eta(self.eta)?;
        check_alpha(self.alpha)?;
        if !self.smoothing_factor.is_finite() || self.smoothing_factor < 0.0 {
            return Err(NetworkError::InvalidConfig(format!(
                "smoothing factor must be finite and non-negative, got {}",
                self.smoothing_factor
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_eta(eta: f64) -> Result<()> {
    if !eta.is_finite() || eta < 0.0 {
        return Err(NetworkError::InvalidConfig(format!(
            "eta must be finite and non-negative, got {}",
            eta
        )));
    }
    Ok(())
}

pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() || alpha < 0.0 {
        return Err(NetworkError::InvalidConfig(format!(
            "alpha must be finite and non-negative, got {}",
            alpha
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NetworkConfig::default();
        assert_eq!(config.eta, 0.15);
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.smoothing_factor, 100.0);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = NetworkConfig::new().eta(0.3).alpha(0.9).smoothing_factor(10.0).seed(7);
        assert_eq!(config.eta, 0.3);
        assert_eq!(config.alpha, 0.9);
        assert_eq!(config.smoothing_factor, 10.0);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            NetworkConfig::new().eta(-0.1).validate(),
            Err(NetworkError::InvalidConfig(_))
        ));
        assert!(matches!(
            NetworkConfig::new().alpha(f64::NAN).validate(),
            Err(NetworkError::InvalidConfig(_))
        ));
        assert!(matches!(
            NetworkConfig::new().smoothing_factor(f64::INFINITY).validate(),
            Err(NetworkError::InvalidConfig(_))
        ));
    }
}
