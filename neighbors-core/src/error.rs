//! Snapshot validation errors

use thiserror::Error;

/// Reasons a snapshot cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("board has no rows")]
    EmptyBoard,

    #[error("first board row has no columns")]
    EmptyFirstRow,

    #[error("turn {turn} is not one of the four seats")]
    TurnOutOfRange { turn: u32 },

    #[error("turn {turn} has no entry in players (got {players} players)")]
    MissingPlayer { turn: u32, players: usize },
}
