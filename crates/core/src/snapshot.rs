//! Read-only frame handed to renderers.

use crate::board::Grid;
use crate::piece::{Piece, PieceMatrix};
use crate::types::{Cell, ColorId, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub color: ColorId,
    pub matrix: PieceMatrix,
    pub row: i8,
    pub col: i8,
}

impl ActiveSnapshot {
    /// Occupied cells in board coordinates. May include rows above the grid.
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8, ColorId)> + '_ {
        self.matrix
            .occupied()
            .map(move |(r, c, color)| (self.row + r, self.col + c, color))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            color: value.color,
            matrix: value.matrix,
            row: value.row,
            col: value.col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            game_over: false,
        }
    }
}
