//! Configuration for the pixel-size selector.

use serde::{Deserialize, Serialize};

/// Configuration for the pixel-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Cell size threshold in the input rasters' linear units.
    ///
    /// Values `<= 0` mean "use the mean of the input cell sizes".
    #[serde(default)]
    pub threshold: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { threshold: 0.0 }
    }
}

impl SelectorConfig {
    /// Explicit threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source shaped like the
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("CELL_SIZE_THRESHOLD") {
            match val.trim().parse() {
                Ok(threshold) => config.threshold = threshold,
                Err(_) => tracing::warn!(
                    value = %val,
                    "Ignoring unparseable CELL_SIZE_THRESHOLD"
                ),
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.threshold.is_finite() {
            return Err("threshold must be a finite number".to_string());
        }

        Ok(())
    }

    /// The threshold to pass to setup, or `None` to derive it from the
    /// input cell sizes.
    pub fn threshold_override(&self) -> Option<f64> {
        if self.threshold > 0.0 {
            Some(self.threshold)
        } else {
            None
        }
    }
}
