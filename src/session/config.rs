//! Session configuration
//!
//! Defaults mirror the classic console run: 100 steps, lengths 3..=7,
//! 50 ms between steps. A JSON file may replace the defaults wholesale;
//! missing fields fall back to their default values. Explicit overrides
//! (command-line values) are applied last.

use crate::error::{DriftError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of generation steps
    pub iterations: u32,
    /// Smallest length requested from the engine
    pub min_length: usize,
    /// Largest length requested from the engine (inclusive)
    pub max_length: usize,
    /// Delay between steps in milliseconds (0 disables pacing)
    pub pace_ms: u64,
    /// Engine seed; None derives one from the clock
    pub seed: Option<i64>,
    /// Seed for the length picker; None draws from OS entropy
    pub length_seed: Option<u64>,
}

/// Values that take precedence over both defaults and a config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub iterations: Option<u32>,
    pub seed: Option<i64>,
    pub pace_ms: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            min_length: 3,
            max_length: 7,
            pace_ms: 50,
            seed: None,
            length_seed: None,
        }
    }
}

impl SessionConfig {
    /// Short unpaced run
    pub fn quick() -> Self {
        Self {
            iterations: 10,
            pace_ms: 0,
            ..Self::default()
        }
    }

    /// Fully reproducible run: fixed engine seed and fixed length picker
    pub fn reproducible(seed: i64) -> Self {
        Self {
            seed: Some(seed),
            length_seed: Some(seed as u64),
            pace_ms: 0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(DriftError::Config("min_length must be at least 1".into()));
        }
        if self.min_length > self.max_length {
            return Err(DriftError::Config(format!(
                "min_length {} exceeds max_length {}",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, then the file at `path` if given, then `overrides`
    pub fn layered(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(iterations) = overrides.iterations {
            self.iterations = iterations;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(pace_ms) = overrides.pace_ms {
            self.pace_ms = pace_ms;
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
