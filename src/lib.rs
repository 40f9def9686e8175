//! driftword — deterministic drift/phase word-sequence engine
//!
//! A seeded 32-byte state vector is rotated once per step; the drift and
//! phase derived from it choose between sampling words from a fixed
//! vocabulary and extracting a pre-authored phrase fragment.

pub mod engine;
pub mod error;
pub mod session;

pub use engine::{SequenceEngine, StateVector, StepOutcome, Strategy};
pub use error::{DriftError, Result};
pub use session::{ConfigOverrides, Session, SessionConfig, SessionReport, StepRecord};
