//! Offset-row hex board geometry
//!
//! Every odd row is shifted half a cell to the right of the even rows:
//!
//! ```text
//! ⬢ ⬢ ⬢ ⬢ ⬢ ⬢
//!  ⬢ ⬢ ⬢ ⬢ ⬢ ⬢
//! ⬢ ⬢ ⬢ ⬢ ⬢ ⬢
//! ```
//!
//! Rows may differ in length and any slot may be a hole (`None`).

use serde::{Deserialize, Serialize};

use crate::player::Seat;

/// Grid slot as (row, col)
///
/// Serialized as a `[row, col]` pair, which is what the game server sends
/// and expects back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The six adjacent slots in fixed order:
    /// up-left, up-right, down-left, down-right, left, right.
    ///
    /// The slots are not bounds-checked.
    pub fn neighbors(self) -> [Position; 6] {
        // Odd rows sit half a cell to the right
        let offset = self.row.rem_euclid(2);
        let Position { row, col } = self;

        [
            Position::new(row - 1, col + offset - 1), // up-left
            Position::new(row - 1, col + offset),     // up-right
            Position::new(row + 1, col + offset - 1), // down-left
            Position::new(row + 1, col + offset),     // down-right
            Position::new(row, col - 1),              // left
            Position::new(row, col + 1),              // right
        ]
    }

    /// Manhattan distance in raw (row, col) space
    pub fn manhattan_distance(self, other: Position) -> u64 {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col))
    }
}

impl From<[i32; 2]> for Position {
    fn from([row, col]: [i32; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for [i32; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}

/// A playable cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Owning player index, `None` while unclaimed
    #[serde(rename = "owner_id", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<u8>,
    /// Attack and defense strength
    pub power: u32,
    /// Upgrade tier
    pub level: u32,
}

impl Cell {
    pub const fn unclaimed(power: u32, level: u32) -> Self {
        Self { owner: None, power, level }
    }

    pub const fn owned(owner: u8, power: u32, level: u32) -> Self {
        Self { owner: Some(owner), power, level }
    }

    pub fn is_owned_by(&self, seat: Seat) -> bool {
        self.owner == Some(seat.index())
    }
}

/// Read-only view over the cell grid
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Vec<Option<Cell>>>,
}

impl Board {
    pub fn new(cells: Vec<Vec<Option<Cell>>>) -> Self {
        Self { cells }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Length of the first row, the board's nominal width
    pub fn first_row_len(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Cell at `pos`, or `None` when out of bounds or a hole
    pub fn cell_at(&self, pos: Position) -> Option<&Cell> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.cells.get(row)?.get(col)?.as_ref()
    }

    /// Owner of the cell at `pos`; absent cells have no owner
    pub fn owner_of(&self, pos: Position) -> Option<u8> {
        self.cell_at(pos).and_then(|cell| cell.owner)
    }

    /// Every present cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                let pos = Position::new(i32::try_from(row).ok()?, i32::try_from(col).ok()?);
                cell.as_ref().map(|cell| (pos, cell))
            })
        })
    }

    /// Positions of every present cell in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells().map(|(pos, _)| pos)
    }

    /// Adjacent cells not owned by `seat`, in neighbor order.
    ///
    /// Holes and off-board slots are skipped; unclaimed cells are included.
    pub fn enemy_neighbors(
        &self,
        pos: Position,
        seat: Seat,
    ) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        pos.neighbors().into_iter().filter_map(move |to| {
            self.cell_at(to)
                .filter(|cell| !cell.is_owned_by(seat))
                .map(|cell| (to, cell))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_board() -> Board {
        // 3x3 with a hole in the middle of the top row
        Board::new(vec![
            vec![Some(Cell::owned(0, 3, 1)), None, Some(Cell::unclaimed(1, 1))],
            vec![
                Some(Cell::owned(1, 2, 1)),
                Some(Cell::owned(0, 4, 2)),
                Some(Cell::unclaimed(1, 1)),
            ],
            vec![Some(Cell::owned(0, 1, 1)), Some(Cell::owned(2, 5, 1))],
        ])
    }

    #[test]
    fn test_even_row_neighbors() {
        let n = Position::new(2, 3).neighbors();
        assert_eq!(n[0], Position::new(1, 2));
        assert_eq!(n[1], Position::new(1, 3));
        assert_eq!(n[2], Position::new(3, 2));
        assert_eq!(n[3], Position::new(3, 3));
        assert_eq!(n[4], Position::new(2, 2));
        assert_eq!(n[5], Position::new(2, 4));
    }

    #[test]
    fn test_odd_row_neighbors() {
        let n = Position::new(1, 3).neighbors();
        assert_eq!(n[0], Position::new(0, 3));
        assert_eq!(n[1], Position::new(0, 4));
        assert_eq!(n[2], Position::new(2, 3));
        assert_eq!(n[3], Position::new(2, 4));
        assert_eq!(n[4], Position::new(1, 2));
        assert_eq!(n[5], Position::new(1, 4));
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let board = ring_board();
        assert!(board.cell_at(Position::new(-1, 0)).is_none());
        assert!(board.cell_at(Position::new(0, -1)).is_none());
        assert!(board.cell_at(Position::new(3, 0)).is_none());
        // Short last row
        assert!(board.cell_at(Position::new(2, 2)).is_none());
        // Hole
        assert!(board.cell_at(Position::new(0, 1)).is_none());
        assert_eq!(board.cell_at(Position::new(1, 1)).map(|c| c.power), Some(4));
    }

    #[test]
    fn test_owner_of_absent_cell_is_none() {
        let board = ring_board();
        assert_eq!(board.owner_of(Position::new(0, 1)), None);
        assert_eq!(board.owner_of(Position::new(9, 9)), None);
        assert_eq!(board.owner_of(Position::new(0, 2)), None);
        assert_eq!(board.owner_of(Position::new(1, 0)), Some(1));
    }

    #[test]
    fn test_positions_row_major_skips_holes() {
        let board = ring_board();
        let positions: Vec<Position> = board.positions().collect();
        assert_eq!(positions.len(), 7);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(0, 2));
        assert_eq!(positions[6], Position::new(2, 1));

        let powers: Vec<u32> = board.cells().map(|(_, cell)| cell.power).collect();
        assert_eq!(powers, vec![3, 1, 2, 4, 1, 1, 5]);
    }

    #[test]
    fn test_enemy_neighbors_order_and_filtering() {
        let board = ring_board();
        // (1,1) is odd: up-left (0,1) hole, up-right (0,2) unclaimed,
        // down-left (2,1) enemy, down-right (2,2) off-board,
        // left (1,0) enemy, right (1,2) unclaimed
        let enemies: Vec<Position> = board
            .enemy_neighbors(Position::new(1, 1), Seat::NorthWest)
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(
            enemies,
            vec![
                Position::new(0, 2),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_enemy_neighbors_excludes_own_cells() {
        let board = ring_board();
        // (0,0): only down-right (1,0) is on the board and not ours,
        // right (0,1) is a hole
        let enemies: Vec<Position> = board
            .enemy_neighbors(Position::new(0, 0), Seat::NorthWest)
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(enemies, vec![Position::new(1, 0)]);
    }

    #[test]
    fn test_position_wire_format() {
        let json = serde_json::to_string(&Position::new(2, 5)).unwrap();
        assert_eq!(json, "[2,5]");
        let pos: Position = serde_json::from_str("[4,1]").unwrap();
        assert_eq!(pos, Position::new(4, 1));
    }

    #[test]
    fn test_manhattan_distance() {
        let home = Position::new(0, 0);
        assert_eq!(Position::new(2, 3).manhattan_distance(home), 5);
        assert_eq!(home.manhattan_distance(Position::new(-1, 4)), 5);
    }
}
