//! Tie-break source for equally good candidates

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// How to choose among equally scored candidates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the first candidate in scan order
    #[default]
    FirstFound,
    /// Pick uniformly with a ChaCha8 stream seeded per evaluation
    Seeded(u64),
}

/// Picker built fresh for every evaluation
pub struct TieBreaker {
    rng: Option<ChaCha8Rng>,
}

impl TieBreaker {
    pub fn new(tie_break: TieBreak) -> Self {
        let rng = match tie_break {
            TieBreak::FirstFound => None,
            TieBreak::Seeded(seed) => Some(ChaCha8Rng::seed_from_u64(seed)),
        };
        Self { rng }
    }

    /// Choose one of `candidates`, `None` only when there are none
    pub fn pick<'c, T>(&mut self, candidates: &'c [T]) -> Option<&'c T> {
        match &mut self.rng {
            None => candidates.first(),
            Some(rng) => candidates.choose(rng),
        }
    }
}
