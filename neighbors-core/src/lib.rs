//! Neighbors Force Core - Turn evaluation for the bot player
//!
//! This crate provides the decision logic for one bot turn:
//! - Board view over the offset-row hex grid
//! - Neighbor resolution and snapshot validation
//! - Attack planning with banded scores
//! - Upgrade planning toward the frontier

pub mod action;
pub mod attack;
pub mod board;
pub mod error;
pub mod planner;
pub mod player;
pub mod snapshot;
pub mod tiebreak;
pub mod upgrade;

// Re-exports for convenient access
pub use action::ActionRecord;
pub use attack::{plan_attack, score_attack, Attack, AttackStrategy};
pub use board::{Board, Cell, Position};
pub use error::SnapshotError;
pub use planner::{compute_attack, compute_upgrade, Evaluator, PlannerConfig};
pub use player::{Seat, SEAT_COUNT};
pub use snapshot::{PlayerState, Snapshot, TurnContext};
pub use tiebreak::{TieBreak, TieBreaker};
pub use upgrade::{plan_upgrade, upgrade_cost, UpgradeStrategy};
