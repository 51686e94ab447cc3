//! Attack and upgrade commands - evaluate one snapshot offline
//!
//! Reads a snapshot from a file (or `-` for stdin) and prints the action
//! record exactly as the HTTP endpoints would return it.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use neighbors_core::{ActionRecord, Evaluator, PlannerConfig, Snapshot};

#[derive(Args)]
pub struct DecideArgs {
    /// Snapshot JSON file, `-` for stdin
    #[arg(long, value_name = "FILE", default_value = "-")]
    pub snapshot: PathBuf,

    /// Pretty-print the decision
    #[arg(long)]
    pub pretty: bool,
}

/// Which planner to run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Attack,
    Upgrade,
}

pub fn run(args: DecideArgs, decision: Decision, planner: PlannerConfig) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let record = decide(&snapshot, decision, planner)?;

    tracing::debug!("{:?} decision for player {}: {:?}", decision, snapshot.turn, record);

    let output = if args.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{}", output);

    Ok(())
}

fn decide(snapshot: &Snapshot, decision: Decision, planner: PlannerConfig) -> Result<ActionRecord> {
    let evaluator = Evaluator::new(planner);
    let record = match decision {
        Decision::Attack => evaluator.compute_attack(snapshot),
        Decision::Upgrade => evaluator.compute_upgrade(snapshot),
    }
    .context("Snapshot cannot be evaluated")?;

    Ok(record)
}

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?
    };

    Snapshot::from_json(&json).with_context(|| format!("Invalid snapshot: {}", path.display()))
}
