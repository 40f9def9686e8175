//! Sequence engine — the seeded state automaton and its two output modes
//!
//! A step rotates the state vector, derives drift and phase from it, and
//! lets the phase pick between coherent extraction and stochastic sampling.

mod corpus;
mod state;
mod strategy;
mod sequencer;

pub use corpus::{FRAGMENTS, VOCABULARY};
pub use state::{StateVector, DRIFT_MODULUS, STATE_LEN};
pub use strategy::{
    coherent_extraction, phase, stochastic_sampling, Strategy, COHERENT_PHASE_LIMIT,
    PHASE_MODULUS,
};
pub use sequencer::{SequenceEngine, StepOutcome, DEFAULT_SEQUENCE_LENGTH, TIME_SEED_MODULUS};
