//! SequenceEngine — seeded, deterministic word-sequence generator
//!
//! Each call advances the iteration counter, rotates the state vector once,
//! derives drift and phase from the result, and hands the state to the
//! strategy the phase selects.

use super::state::{StateVector, STATE_LEN};
use super::strategy::{self, Strategy};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Length used when the caller has no preference
pub const DEFAULT_SEQUENCE_LENGTH: usize = 5;

/// Modulus applied to wall-clock milliseconds when no seed is given
pub const TIME_SEED_MODULUS: u128 = 999_999;

/// Everything one generation step produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub iteration: u64,
    pub drift: u8,
    pub phase: u8,
    pub strategy: Strategy,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceEngine {
    seed: i64,
    state: StateVector,
    iterations: u64,
    last_strategy: Option<Strategy>,
}

impl SequenceEngine {
    /// Build an engine; `None` derives the seed from the clock
    pub fn new(seed: Option<i64>) -> Self {
        let seed = seed.unwrap_or_else(time_seed);
        Self {
            seed,
            state: StateVector::from_seed(seed),
            iterations: 0,
            last_strategy: None,
        }
    }

    pub fn with_seed(seed: i64) -> Self {
        Self::new(Some(seed))
    }

    /// Advance one step and return the generated words
    pub fn generate_sequence(&mut self, length: usize) -> Vec<String> {
        self.step(length).words
    }

    pub fn generate_default(&mut self) -> Vec<String> {
        self.generate_sequence(DEFAULT_SEQUENCE_LENGTH)
    }

    /// Advance one step and return the words with the step's diagnostics
    pub fn step(&mut self, length: usize) -> StepOutcome {
        self.iterations += 1;
        self.state.rotate();

        let drift = self.calculate_drift();
        let phase = strategy::phase(self.iterations, drift);
        let strategy = Strategy::for_phase(phase);
        debug!(
            "step {}: drift={} phase={} -> {}",
            self.iterations, drift, phase, strategy
        );

        self.last_strategy = Some(strategy);
        StepOutcome {
            iteration: self.iterations,
            drift,
            phase,
            strategy,
            words: strategy.produce(&self.state, length),
        }
    }

    /// Drift of the current state, in [0, 16]
    pub fn calculate_drift(&self) -> u8 {
        self.state.drift()
    }

    /// Phase of the current state and iteration count, in [0, 22]
    pub fn phase(&self) -> u8 {
        strategy::phase(self.iterations, self.calculate_drift())
    }

    pub fn last_strategy(&self) -> Option<Strategy> {
        self.last_strategy
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn state(&self) -> &[u8] {
        self.state.as_slice()
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn state_checksum(&self) -> String {
        self.state.checksum()
    }

    pub fn summary(&self) -> String {
        format!(
            "SequenceEngine seed={} | dims={} | iterations={} | drift={} | phase={} | checksum={}",
            self.seed,
            STATE_LEN,
            self.iterations,
            self.calculate_drift(),
            self.phase(),
            self.state_checksum()
        )
    }
}

impl Default for SequenceEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

fn time_seed() -> i64 {
    // A clock before the epoch degrades to seed 0
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    (millis % TIME_SEED_MODULUS) as i64
}
