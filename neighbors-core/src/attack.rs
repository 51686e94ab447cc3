//! Attack planning
//!
//! Candidate attacks are (source, target) pairs where the source is owned by
//! the acting seat with power above 1 and the target is an adjacent cell the
//! seat does not own. Scores fall into three bands so that any attack the
//! source should win outranks every other kind of move:
//!
//! - unclaimed target: the source's power
//! - target at least as strong: `100 + (target - source)`
//! - weaker target: `10000 + (target - source)`

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Position};
use crate::snapshot::TurnContext;
use crate::tiebreak::TieBreaker;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Base score for attacking a cell at least as strong as the source
pub const LOSING_BAND: i64 = 100;

/// Base score for attacking a weaker cell
pub const WINNING_BAND: i64 = 10_000;

/// A cell needs more power than this to attack
pub const MIN_ATTACK_POWER: u32 = 1;

// ============================================================================
// TYPES
// ============================================================================

/// One attack from an owned cell onto an adjacent cell.
///
/// Serialized as `[[from_row, from_col], [to_row, to_col]]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Position; 2]", into = "[Position; 2]")]
pub struct Attack {
    pub from: Position,
    pub to: Position,
}

impl From<[Position; 2]> for Attack {
    fn from([from, to]: [Position; 2]) -> Self {
        Self { from, to }
    }
}

impl From<Attack> for [Position; 2] {
    fn from(attack: Attack) -> Self {
        [attack.from, attack.to]
    }
}

/// Which attack heuristic to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackStrategy {
    /// Best-scoring candidate over the whole board
    #[default]
    Scored,
    /// One target per source, the last source with any target wins
    FirstNeighbor,
}

// ============================================================================
// PLANNING
// ============================================================================

/// Score a single candidate attack
pub fn score_attack(source: &Cell, target: &Cell) -> i64 {
    let source_power = i64::from(source.power);
    let target_power = i64::from(target.power);

    match target.owner {
        None => source_power,
        Some(_) if source_power <= target_power => LOSING_BAND + (target_power - source_power),
        Some(_) => WINNING_BAND + (target_power - source_power),
    }
}

/// Choose this turn's attack, if any
pub fn plan_attack(
    ctx: &TurnContext<'_>,
    strategy: AttackStrategy,
    tie_breaker: &mut TieBreaker,
) -> Option<Attack> {
    match strategy {
        AttackStrategy::Scored => best_scored_attack(ctx, tie_breaker),
        AttackStrategy::FirstNeighbor => first_neighbor_attack(ctx, tie_breaker),
    }
}

/// Owned cells strong enough to attack, row-major
fn attackers<'a>(ctx: &TurnContext<'a>) -> impl Iterator<Item = (Position, &'a Cell)> + 'a {
    ctx.owned_cells()
        .filter(|(_, cell)| cell.power > MIN_ATTACK_POWER)
}

fn best_scored_attack(ctx: &TurnContext<'_>, tie_breaker: &mut TieBreaker) -> Option<Attack> {
    let mut best_score: Option<i64> = None;
    let mut tied = Vec::new();

    for (from, source) in attackers(ctx) {
        for (to, target) in ctx.board.enemy_neighbors(from, ctx.seat) {
            let score = score_attack(source, target);
            match best_score {
                Some(best) if score < best => {}
                Some(best) if score == best => tied.push(Attack { from, to }),
                _ => {
                    best_score = Some(score);
                    tied.clear();
                    tied.push(Attack { from, to });
                }
            }
        }
    }

    match best_score {
        Some(score) if score > 0 => tie_breaker.pick(&tied).copied(),
        _ => None,
    }
}

/// Every source picks one of its targets and the last pick stands, so the
/// source latest in row-major order wins.
fn first_neighbor_attack(ctx: &TurnContext<'_>, tie_breaker: &mut TieBreaker) -> Option<Attack> {
    let mut chosen = None;

    for (from, _) in attackers(ctx) {
        let targets: Vec<Position> = ctx
            .board
            .enemy_neighbors(from, ctx.seat)
            .map(|(to, _)| to)
            .collect();
        if let Some(&to) = tie_breaker.pick(&targets) {
            chosen = Some(Attack { from, to });
        }
    }

    chosen
}
