//! Upgrade planning
//!
//! The frontier strategy favours owned cells furthest from the seat's home
//! corner, and among equally distant cells the lowest level. The random
//! strategy picks any affordable owned cell through the tie-break source.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::snapshot::TurnContext;
use crate::tiebreak::TieBreaker;

/// Which upgrade heuristic to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeStrategy {
    /// Furthest from home first, then lowest level
    #[default]
    Frontier,
    /// Any affordable owned cell
    Random,
}

/// Cost of raising a cell one level from `level`: the triangular number
/// `level * (level + 1) / 2`
pub fn upgrade_cost(level: u32) -> u64 {
    let level = u64::from(level);
    level * (level + 1) / 2
}

/// Choose this turn's upgrade, if any
pub fn plan_upgrade(
    ctx: &TurnContext<'_>,
    strategy: UpgradeStrategy,
    tie_breaker: &mut TieBreaker,
) -> Option<Position> {
    if ctx.points == 0 {
        return None;
    }

    match strategy {
        UpgradeStrategy::Frontier => frontier_upgrade(ctx),
        UpgradeStrategy::Random => random_upgrade(ctx, tie_breaker),
    }
}

fn frontier_upgrade(ctx: &TurnContext<'_>) -> Option<Position> {
    let home = ctx.home_corner();
    let mut owned: Vec<_> = ctx.owned_cells().collect();

    // Stable, so full ties stay in row-major order
    owned.sort_by_key(|(pos, cell)| (Reverse(pos.manhattan_distance(home)), cell.level));

    owned
        .into_iter()
        .find(|(_, cell)| upgrade_cost(cell.level) <= ctx.points)
        .map(|(pos, _)| pos)
}

fn random_upgrade(ctx: &TurnContext<'_>, tie_breaker: &mut TieBreaker) -> Option<Position> {
    let affordable: Vec<Position> = ctx
        .owned_cells()
        .filter(|(_, cell)| upgrade_cost(cell.level) <= ctx.points)
        .map(|(pos, _)| pos)
        .collect();

    tie_breaker.pick(&affordable).copied()
}
