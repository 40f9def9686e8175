//! Session report — per-step records plus banner/footer rendering
//!
//! The report is the JSON-exportable record of a finished session.

use super::SessionConfig;
use crate::engine::Strategy;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

const SEPARATOR_WIDTH: usize = 50;

/// One engine call as seen by the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based position within the session
    pub index: usize,
    /// Length requested from the engine
    pub length: usize,
    pub drift: u8,
    pub phase: u8,
    pub strategy: Strategy,
    pub words: Vec<String>,
}

impl StepRecord {
    /// `[007] drift=05 phase=02 | third floor ...`
    pub fn line(&self) -> String {
        format!(
            "[{:03}] drift={:02} phase={:02} | {}",
            self.index,
            self.drift,
            self.phase,
            self.words.join(" ")
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub seed: i64,
    pub dimensionality: usize,
    pub config: SessionConfig,
    pub records: Vec<StepRecord>,
    pub final_checksum: String,
}

impl SessionReport {
    pub fn banner(&self) -> String {
        render_banner(&self.started_at, self.seed, self.dimensionality)
    }

    pub fn footer(&self) -> String {
        render_footer(&self.final_checksum)
    }

    /// Banner, one line per step, footer
    pub fn render(&self) -> String {
        let mut out = self.banner();
        out.push('\n');
        for record in &self.records {
            out.push_str(&record.line());
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.footer());
        out
    }

    pub fn coherent_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.strategy == Strategy::Coherent)
            .count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "Session {} | seed={} | steps={} | coherent={} | checksum={}",
            short_id(&self.session_id),
            self.seed,
            self.records.len(),
            self.coherent_count(),
            self.final_checksum
        )
    }
}

/// First 8 characters of a session id; shorter ids are returned whole
pub(crate) fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((cut, _)) => &id[..cut],
        None => id,
    }
}

pub(crate) fn render_banner(started_at: &DateTime<Utc>, seed: i64, dimensionality: usize) -> String {
    format!(
        "# Session initialized: {}\n# Seed: {}\n# State vector dimensionality: {}\n#{}\n",
        started_at.to_rfc3339(),
        seed,
        dimensionality,
        "=".repeat(SEPARATOR_WIDTH)
    )
}

pub(crate) fn render_footer(checksum: &str) -> String {
    format!(
        "#{}\n# Processing complete\n# Final state checksum: {}",
        "=".repeat(SEPARATOR_WIDTH),
        checksum
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, strategy: Strategy) -> StepRecord {
        StepRecord {
            index,
            length: 2,
            drift: 5,
            phase: 2,
            strategy,
            words: vec!["third".into(), "floor".into()],
        }
    }

    fn sample_report() -> SessionReport {
        SessionReport {
            session_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
            seed: 42,
            dimensionality: 32,
            config: SessionConfig::quick(),
            records: vec![
                record(0, Strategy::Stochastic),
                record(1, Strategy::Coherent),
                record(2, Strategy::Coherent),
            ],
            final_checksum: "d127498c".into(),
        }
    }

    #[test]
    fn test_step_line_format() {
        let line = record(7, Strategy::Coherent).line();
        assert_eq!(line, "[007] drift=05 phase=02 | third floor");
    }

    #[test]
    fn test_banner_and_footer() {
        let report = sample_report();
        let banner = report.banner();
        assert!(banner.starts_with("# Session initialized: "));
        assert!(banner.contains("# Seed: 42\n"));
        assert!(banner.contains("# State vector dimensionality: 32\n"));
        assert!(banner.contains(&format!("#{}", "=".repeat(50))));

        let footer = report.footer();
        assert!(footer.ends_with("# Final state checksum: d127498c"));
        assert!(footer.contains("# Processing complete"));
    }

    #[test]
    fn test_render_and_counts() {
        let report = sample_report();
        let rendered = report.render();
        assert_eq!(rendered.matches("drift=").count(), 3);
        assert_eq!(report.coherent_count(), 2);
        println!("{}", report.summary());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("driftword-report-{}.json", uuid::Uuid::new_v4()));
        let report = sample_report();
        report.save(&path).unwrap();
        let loaded = SessionReport::load(&path).unwrap();
        assert_eq!(loaded.records, report.records);
        assert_eq!(loaded.session_id, report.session_id);
        assert_eq!(loaded.final_checksum, "d127498c");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
        assert_eq!(short_id("ééééééééé"), "éééééééé");
    }

    #[test]
    fn test_summary_of_loaded_report_with_short_id() {
        let path = std::env::temp_dir().join(format!("driftword-report-{}.json", uuid::Uuid::new_v4()));
        let mut value = serde_json::to_value(sample_report()).unwrap();
        value["session_id"] = serde_json::Value::from("abc");
        std::fs::write(&path, value.to_string()).unwrap();

        let loaded = SessionReport::load(&path).unwrap();
        let summary = loaded.summary();
        assert!(summary.starts_with("Session abc | seed=42"));
        assert!(summary.ends_with("checksum=d127498c"));

        value["session_id"] = serde_json::Value::from("séssion-ü");
        std::fs::write(&path, value.to_string()).unwrap();
        let loaded = SessionReport::load(&path).unwrap();
        assert!(loaded.summary().starts_with("Session séssion- | "));
        let _ = std::fs::remove_file(&path);
    }
}
