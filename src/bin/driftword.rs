//! driftword CLI — console front-end for the sequence engine
//!
//! Commands:
//!   driftword run     — paced session with random lengths 3..=7
//!   driftword config  — run a session described by a JSON config file
//!   driftword trace   — deterministic trace for a seed and length list
//!   driftword state   — inspect the initial state for a seed

use driftword::engine::{StateVector, DEFAULT_SEQUENCE_LENGTH};
use driftword::{ConfigOverrides, SequenceEngine, Session, SessionConfig, SessionReport};
use std::path::Path;
use log::warn;
use std::env;

const PACE_ENV: &str = "DRIFTWORD_PACE_MS";
const DEFAULT_TRACE_STEPS: usize = 10;

fn print_usage() {
    println!(
        r#"
driftword — deterministic drift/phase word sequences

Usage: driftword <command> [options]

Commands:
  run     [--config <file.json>] [iterations] [seed]
                                        Paced session (default 100 steps, clock seed);
                                        positional values override the config file
  config  <file.json> [report.json]     Run a session from a config file
  trace   <seed> [lengths...]           Deterministic trace (default 10 x length 5)
  state   <seed>                        Show the seeded state vector
  help                                  Show this message

Environment:
  DRIFTWORD_PACE_MS   Override delay between steps for 'run'
  RUST_LOG            Log filter (default: info)

Examples:
  driftword run
  driftword run 20 42
  driftword run --config session.json 20
  driftword trace 42 5 5 5 5 2
  driftword state -7
"#
    );
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]).await,
        "config" => cmd_config(&args[2..]).await,
        "trace" => cmd_trace(&args[2..]),
        "state" => cmd_state(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
        }
    }
}

fn parse_seed(raw: &str) -> Option<i64> {
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            eprintln!("  Seed must be an integer, got '{}'", raw);
            None
        }
    }
}

/// Run a session, streaming lines as they are produced
async fn run_session(config: SessionConfig) -> Option<SessionReport> {
    let session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("  {}", e);
            return None;
        }
    };
    println!("{}", session.banner());
    let report = session.run_with(|record| println!("{}", record.line())).await;
    println!();
    println!("{}", report.footer());
    Some(report)
}

/// Arguments of `run`: an optional `--config` path plus positional overrides
#[derive(Debug, Default, PartialEq)]
struct RunArgs {
    config_path: Option<String>,
    overrides: ConfigOverrides,
}

fn parse_run_args(args: &[String]) -> Result<RunArgs, String> {
    let mut parsed = RunArgs::default();
    let mut positional = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter.next().ok_or("--config needs a file path")?;
            parsed.config_path = Some(path.clone());
        } else {
            positional.push(arg);
        }
    }

    if positional.len() > 2 {
        return Err(format!("unexpected argument '{}'", positional[2]));
    }
    if let Some(raw) = positional.first() {
        let iterations = raw
            .parse()
            .map_err(|_| format!("iterations must be a number, got '{}'", raw))?;
        parsed.overrides.iterations = Some(iterations);
    }
    if let Some(raw) = positional.get(1) {
        let seed = raw
            .parse()
            .map_err(|_| format!("seed must be an integer, got '{}'", raw))?;
        parsed.overrides.seed = Some(seed);
    }
    Ok(parsed)
}

async fn cmd_run(args: &[String]) {
    let mut run_args = match parse_run_args(args) {
        Ok(run_args) => run_args,
        Err(e) => {
            eprintln!("  {}", e);
            eprintln!("Usage: driftword run [--config <file.json>] [iterations] [seed]");
            return;
        }
    };
    if let Ok(raw) = env::var(PACE_ENV) {
        match raw.parse() {
            Ok(ms) => run_args.overrides.pace_ms = Some(ms),
            Err(_) => warn!("Ignoring {}={:?}: not a number of milliseconds", PACE_ENV, raw),
        }
    }

    let path = run_args.config_path.as_deref().map(Path::new);
    let config = match SessionConfig::layered(path, &run_args.overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  Failed to build session config: {}", e);
            return;
        }
    };

    run_session(config).await;
}

async fn cmd_config(args: &[String]) {
    let Some(path) = args.first() else {
        eprintln!("Usage: driftword config <file.json> [report.json]");
        return;
    };

    let config = match SessionConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  Failed to load config '{}': {}", path, e);
            return;
        }
    };

    let Some(report) = run_session(config).await else {
        return;
    };
    if let Some(out) = args.get(1) {
        match report.save(out) {
            Ok(()) => println!("  Report saved to {}", out),
            Err(e) => eprintln!("  Failed to save report: {}", e),
        }
    }
}

fn cmd_trace(args: &[String]) {
    let Some(raw_seed) = args.first() else {
        eprintln!("Usage: driftword trace <seed> [lengths...]");
        return;
    };
    let Some(seed) = parse_seed(raw_seed) else {
        return;
    };

    let lengths: Vec<usize> = if args.len() > 1 {
        match args[1..]
            .iter()
            .map(|s| s.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(lengths) => lengths,
            Err(_) => {
                eprintln!("  Lengths must be non-negative integers");
                return;
            }
        }
    } else {
        vec![DEFAULT_SEQUENCE_LENGTH; DEFAULT_TRACE_STEPS]
    };

    let mut engine = SequenceEngine::with_seed(seed);
    println!("\n  {}", engine.summary());
    println!("  {}", "-".repeat(70));
    for length in lengths {
        let outcome = engine.step(length);
        println!(
            "  #{:<4} len={} drift={:02} phase={:02} {:<10} | {}",
            outcome.iteration,
            length,
            outcome.drift,
            outcome.phase,
            outcome.strategy.name(),
            outcome.words.join(" ")
        );
    }
    println!("  {}", "-".repeat(70));
    println!("  Final state checksum: {}", engine.state_checksum());
}

fn cmd_state(args: &[String]) {
    let Some(raw_seed) = args.first() else {
        eprintln!("Usage: driftword state <seed>");
        return;
    };
    let Some(seed) = parse_seed(raw_seed) else {
        return;
    };

    let engine = SequenceEngine::with_seed(seed);
    println!("\n  Seed:      {}", seed);
    println!("  Digest:    {}", StateVector::seed_digest(seed));
    println!("  State:     {:?}", engine.state());
    println!("  Drift:     {}", engine.calculate_drift());
    println!("  Checksum:  {}", engine.state_checksum());
}
