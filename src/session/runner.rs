//! Session runner
//!
//! Owns one engine exclusively. Pacing lives here, never in the engine.

use super::report::{render_banner, short_id, SessionReport, StepRecord};
use super::SessionConfig;
use crate::engine::SequenceEngine;
use crate::error::Result;
use chrono::{DateTime, Utc};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{self, Duration};
use uuid::Uuid;

pub struct Session {
    config: SessionConfig,
    session_id: String,
    started_at: DateTime<Utc>,
    engine: SequenceEngine,
    lengths: StdRng,
    records: Vec<StepRecord>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let engine = SequenceEngine::new(config.seed);
        let lengths = match config.length_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session_id = Uuid::new_v4().to_string();
        info!(
            "Session {} initialized: seed={} iterations={} lengths={}..={}",
            short_id(&session_id),
            engine.seed(),
            config.iterations,
            config.min_length,
            config.max_length
        );
        Ok(Self {
            config,
            session_id,
            started_at: Utc::now(),
            engine,
            lengths,
            records: Vec::new(),
        })
    }

    /// Validated configuration; fixed for the session's lifetime
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn engine(&self) -> &SequenceEngine {
        &self.engine
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn banner(&self) -> String {
        render_banner(&self.started_at, self.engine.seed(), self.engine.state().len())
    }

    /// Draw a length, call the engine once, record the result
    pub fn step(&mut self) -> StepRecord {
        let length = self
            .lengths
            .gen_range(self.config.min_length..=self.config.max_length);
        let outcome = self.engine.step(length);
        let record = StepRecord {
            index: self.records.len(),
            length,
            drift: outcome.drift,
            phase: outcome.phase,
            strategy: outcome.strategy,
            words: outcome.words,
        };
        self.records.push(record.clone());
        record
    }

    /// Run all configured steps with pacing, handing each record to `on_step`
    pub async fn run_with<F>(mut self, mut on_step: F) -> SessionReport
    where
        F: FnMut(&StepRecord),
    {
        let pace = Duration::from_millis(self.config.pace_ms);
        for _ in 0..self.config.iterations {
            let record = self.step();
            on_step(&record);
            if !pace.is_zero() {
                time::sleep(pace).await;
            }
        }
        self.finish()
    }

    pub async fn run(self) -> SessionReport {
        self.run_with(|_| {}).await
    }

    /// Run all configured steps back to back, ignoring `pace_ms`
    pub fn run_blocking(mut self) -> SessionReport {
        for _ in 0..self.config.iterations {
            self.step();
        }
        self.finish()
    }

    pub fn finish(self) -> SessionReport {
        let report = SessionReport {
            session_id: self.session_id,
            started_at: self.started_at,
            finished_at: Utc::now(),
            seed: self.engine.seed(),
            dimensionality: self.engine.state().len(),
            final_checksum: self.engine.state_checksum(),
            config: self.config,
            records: self.records,
        };
        info!("{}", report.summary());
        report
    }
}
