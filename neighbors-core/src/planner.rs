//! Turn evaluator
//!
//! Every call validates the snapshot into a fresh [`TurnContext`] and runs
//! one planner over it. The evaluator itself only holds configuration, so
//! one instance can serve concurrent requests.

use serde::{Deserialize, Serialize};

use crate::action::ActionRecord;
use crate::attack::{plan_attack, AttackStrategy};
use crate::error::SnapshotError;
use crate::snapshot::Snapshot;
use crate::tiebreak::{TieBreak, TieBreaker};
use crate::upgrade::{plan_upgrade, UpgradeStrategy};

/// Planner settings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub attack_strategy: AttackStrategy,
    #[serde(default)]
    pub upgrade_strategy: UpgradeStrategy,
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl PlannerConfig {
    pub fn with_attack_strategy(mut self, strategy: AttackStrategy) -> Self {
        self.attack_strategy = strategy;
        self
    }

    pub fn with_upgrade_strategy(mut self, strategy: UpgradeStrategy) -> Self {
        self.upgrade_strategy = strategy;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// Stateless bot evaluator
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: PlannerConfig,
}

impl Evaluator {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Decide this turn's attack; only `attack` is ever set
    pub fn compute_attack(&self, snapshot: &Snapshot) -> Result<ActionRecord, SnapshotError> {
        let ctx = snapshot.context()?;
        let mut tie_breaker = TieBreaker::new(self.config.tie_break);
        let attack = plan_attack(&ctx, self.config.attack_strategy, &mut tie_breaker);
        Ok(ActionRecord::with_attack(attack))
    }

    /// Decide this turn's upgrade; only `upgrade` is ever set
    pub fn compute_upgrade(&self, snapshot: &Snapshot) -> Result<ActionRecord, SnapshotError> {
        let ctx = snapshot.context()?;
        let mut tie_breaker = TieBreaker::new(self.config.tie_break);
        let upgrade = plan_upgrade(&ctx, self.config.upgrade_strategy, &mut tie_breaker);
        Ok(ActionRecord::with_upgrade(upgrade))
    }
}

/// [`Evaluator::compute_attack`] with the default configuration
pub fn compute_attack(snapshot: &Snapshot) -> Result<ActionRecord, SnapshotError> {
    Evaluator::default().compute_attack(snapshot)
}

/// [`Evaluator::compute_upgrade`] with the default configuration
pub fn compute_upgrade(snapshot: &Snapshot) -> Result<ActionRecord, SnapshotError> {
    Evaluator::default().compute_upgrade(snapshot)
}
