//! Session — the paced generation loop around a SequenceEngine
//!
//! A session draws a random length per step, calls the engine once, and
//! collects per-step records into a report with a banner, a formatted line
//! per step, and a closing state checksum.

mod config;
mod runner;
mod report;

pub use config::{ConfigOverrides, SessionConfig};
pub use runner::Session;
pub use report::{SessionReport, StepRecord};
