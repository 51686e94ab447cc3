//! Player seats

use crate::board::{Board, Position};

/// Number of seats at the table
pub const SEAT_COUNT: usize = 4;

/// One of the four fixed seats, named after its home corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    NorthWest = 0,
    SouthEast = 1,
    SouthWest = 2,
    NorthEast = 3,
}

impl Seat {
    pub const ALL: [Seat; SEAT_COUNT] = [
        Seat::NorthWest,
        Seat::SouthEast,
        Seat::SouthWest,
        Seat::NorthEast,
    ];

    pub fn from_index(index: u8) -> Option<Seat> {
        Seat::ALL.get(usize::from(index)).copied()
    }

    /// Player index as it appears in `owner_id`
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Reference point the seat expands away from.
    ///
    /// Uses the grid extents rather than the last valid index, so every
    /// corner except the north-west one lies just outside the board.
    pub fn home_corner(self, board: &Board) -> Position {
        let rows = i32::try_from(board.row_count()).unwrap_or(i32::MAX);
        let cols = i32::try_from(board.first_row_len()).unwrap_or(i32::MAX);

        match self {
            Seat::NorthWest => Position::new(0, 0),
            Seat::SouthEast => Position::new(rows, cols),
            Seat::SouthWest => Position::new(rows, 0),
            Seat::NorthEast => Position::new(0, cols),
        }
    }
}
