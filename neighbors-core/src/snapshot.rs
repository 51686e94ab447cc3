//! Per-turn game snapshot and the validated evaluation context

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Position};
use crate::error::SnapshotError;
use crate::player::Seat;

/// Per-player state carried in a snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Currency available for upgrades
    pub points: u64,
}

/// Full game state for one turn, as sent by the game server.
///
/// Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Index of the acting player
    pub turn: u32,
    pub board: Board,
    pub players: Vec<PlayerState>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate the snapshot and borrow it as an evaluation context
    pub fn context(&self) -> Result<TurnContext<'_>, SnapshotError> {
        if self.board.row_count() == 0 {
            return Err(SnapshotError::EmptyBoard);
        }
        if self.board.first_row_len() == 0 {
            return Err(SnapshotError::EmptyFirstRow);
        }

        let turn = self.turn;
        let seat = u8::try_from(turn)
            .ok()
            .and_then(Seat::from_index)
            .ok_or(SnapshotError::TurnOutOfRange { turn })?;

        let player = usize::try_from(turn)
            .ok()
            .and_then(|i| self.players.get(i))
            .ok_or(SnapshotError::MissingPlayer {
                turn,
                players: self.players.len(),
            })?;

        Ok(TurnContext {
            board: &self.board,
            seat,
            points: player.points,
        })
    }
}

/// Immutable view of one validated turn, shared by the planners
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    pub board: &'a Board,
    pub seat: Seat,
    pub points: u64,
}

impl<'a> TurnContext<'a> {
    /// Cells owned by the acting seat, row-major
    pub fn owned_cells(&self) -> impl Iterator<Item = (Position, &'a Cell)> + 'a {
        let (board, seat): (&'a Board, Seat) = (self.board, self.seat);
        board.cells().filter(move |(_, cell)| cell.is_owned_by(seat))
    }

    pub fn home_corner(&self) -> Position {
        self.seat.home_corner(self.board)
    }
}
