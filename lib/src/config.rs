//! Hyperparameters for [`BinaryClassifier`](crate::classifier::BinaryClassifier).
//!
//! Every field has a default, so a JSON document only needs the keys it
//! overrides:
//!
//! ```rust
//! use logistic_rs::config::ClassifierConfig;
//!
//! let config = ClassifierConfig::from_json_str(r#"{ "learning_rate": 0.1, "seed": 7 }"#).unwrap();
//! assert_eq!(config.learning_rate, 0.1);
//! assert_eq!(config.epochs, 10000);
//! assert_eq!(config.seed, Some(7));
//! ```

use crate::error::{ClassifierError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Training configuration.
///
/// Defaults:
/// - `learning_rate`: 0.001
/// - `epochs`: 10000
/// - `batch_size`: 1
/// - `verbose`: true
/// - `log_every`: 1000
/// - `seed`: `None` (OS entropy)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// SGD step size.
    pub learning_rate: f64,
    /// Number of epochs; each epoch is one mini-batch update.
    pub epochs: usize,
    /// Rows drawn (with replacement) per update.
    pub batch_size: usize,
    /// Log the loss every `log_every` epochs.
    pub verbose: bool,
    pub log_every: usize,
    /// Seed for mini-batch sampling.
    pub seed: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            epochs: 10000,
            batch_size: 1,
            verbose: true,
            log_every: 1000,
            seed: None,
        }
    }
}

impl ClassifierConfig {
    /// Parses a JSON object; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks the values a training run depends on.
    ///
    /// # Errors
    /// `InvalidInput` if `learning_rate` is not a positive finite number, or
    /// `batch_size` / `log_every` is zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ClassifierError::InvalidInput(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if self.batch_size == 0 {
            return Err(ClassifierError::InvalidInput(
                "batch_size must be at least 1".into(),
            ));
        }
        if self.log_every == 0 {
            return Err(ClassifierError::InvalidInput(
                "log_every must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
