//! Server state management
//!
//! The evaluator is immutable, so requests share it without locking.

use neighbors_core::{Evaluator, PlannerConfig};

/// Server-wide shared state
pub struct ServerState {
    pub evaluator: Evaluator,
}

impl ServerState {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
