//! Planner flags shared by every command

use clap::{Args, ValueEnum};

use neighbors_core::{AttackStrategy, PlannerConfig, TieBreak, UpgradeStrategy};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Best banded score across the board
    #[default]
    Scored,
    /// One target per source, the last source with a target wins
    FirstNeighbor,
}

impl From<StrategyArg> for AttackStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scored => AttackStrategy::Scored,
            StrategyArg::FirstNeighbor => AttackStrategy::FirstNeighbor,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum UpgradeStrategyArg {
    /// Furthest from home, then lowest level
    #[default]
    Frontier,
    /// Any affordable owned cell
    Random,
}

impl From<UpgradeStrategyArg> for UpgradeStrategy {
    fn from(arg: UpgradeStrategyArg) -> Self {
        match arg {
            UpgradeStrategyArg::Frontier => UpgradeStrategy::Frontier,
            UpgradeStrategyArg::Random => UpgradeStrategy::Random,
        }
    }
}

#[derive(Args, Debug)]
pub struct PlannerArgs {
    /// Attack heuristic
    #[arg(long, global = true, value_enum, default_value_t = StrategyArg::Scored)]
    pub attack_strategy: StrategyArg,

    /// Upgrade heuristic
    #[arg(long, global = true, value_enum, default_value_t = UpgradeStrategyArg::Frontier)]
    pub upgrade_strategy: UpgradeStrategyArg,

    /// Break ties randomly with this seed instead of taking the first found
    #[arg(long, global = true)]
    pub tie_break_seed: Option<u64>,
}

impl PlannerArgs {
    pub fn to_config(&self) -> PlannerConfig {
        let tie_break = self.tie_break_seed.map_or(TieBreak::FirstFound, TieBreak::Seeded);

        PlannerConfig::default()
            .with_attack_strategy(self.attack_strategy.into())
            .with_upgrade_strategy(self.upgrade_strategy.into())
            .with_tie_break(tie_break)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_canonical() {
        let args = PlannerArgs {
            attack_strategy: StrategyArg::default(),
            upgrade_strategy: UpgradeStrategyArg::default(),
            tie_break_seed: None,
        };
        assert_eq!(args.to_config(), PlannerConfig::default());
    }

    #[test]
    fn test_seed_and_strategy() {
        let args = PlannerArgs {
            attack_strategy: StrategyArg::FirstNeighbor,
            upgrade_strategy: UpgradeStrategyArg::Frontier,
            tie_break_seed: Some(42),
        };
        let config = args.to_config();
        assert_eq!(config.attack_strategy, AttackStrategy::FirstNeighbor);
        assert_eq!(config.upgrade_strategy, UpgradeStrategy::Frontier);
        assert_eq!(config.tie_break, TieBreak::Seeded(42));
    }

    #[test]
    fn test_upgrade_strategy_flag() {
        let args = PlannerArgs {
            attack_strategy: StrategyArg::Scored,
            upgrade_strategy: UpgradeStrategyArg::Random,
            tie_break_seed: Some(7),
        };
        let config = args.to_config();
        assert_eq!(config.upgrade_strategy, UpgradeStrategy::Random);
        assert_eq!(config.attack_strategy, AttackStrategy::Scored);
        assert_eq!(config.tie_break, TieBreak::Seeded(7));
    }
}
