//! Piece module - a live shape instance on the board
//!
//! A piece is a colored copy of a shape's matrix plus an anchor giving the
//! matrix's top-left corner in board coordinates. Rotation swaps in a new
//! matrix and leaves the anchor where it was: the piece pivots about its
//! top-left corner, not its visual center, and no kick is attempted.

use crate::shapes::Shape;
use crate::types::{Cell, ColorId, BOARD_WIDTH, MAX_SHAPE_DIM};

/// A shape matrix whose occupied cells carry a color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMatrix {
    rows: u8,
    cols: u8,
    /// Row-major; cells outside `rows x cols` stay `Empty`.
    cells: [[Cell; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl PieceMatrix {
    /// Tag every occupied cell of `shape` with `color`.
    pub fn from_shape(shape: &Shape, color: ColorId) -> Self {
        let mut cells = [[Cell::Empty; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in cells.iter_mut().enumerate().take(shape.rows() as usize) {
            for (c, cell) in row.iter_mut().enumerate().take(shape.cols() as usize) {
                if shape.is_filled(r, c) {
                    *cell = Cell::Color(color);
                }
            }
        }
        Self {
            rows: shape.rows(),
            cols: shape.cols(),
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell at local `(row, col)`; `Empty` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.rows as usize && col < self.cols as usize {
            self.cells[row][col]
        } else {
            Cell::Empty
        }
    }

    /// 90° clockwise: reverse the row order, then transpose. `R x C` becomes `C x R`.
    pub fn rotated(&self) -> Self {
        let (r, c) = (self.rows as usize, self.cols as usize);
        let mut cells = [[Cell::Empty; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in cells.iter_mut().enumerate().take(c) {
            for (j, cell) in row.iter_mut().enumerate().take(r) {
                *cell = self.cells[r - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Occupied cells as `(row, col, color)` in the local frame.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, ColorId)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize).filter_map(move |c| {
                self.cells[r][c]
                    .color()
                    .map(|color| (r as i8, c as i8, color))
            })
        })
    }
}

/// Active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: ColorId,
    pub matrix: PieceMatrix,
    /// Board row of the matrix's top edge.
    pub row: i8,
    /// Board column of the matrix's left edge.
    pub col: i8,
}

impl Piece {
    /// Build a piece at the spawn position: top row, horizontally centered.
    pub fn spawn(shape: &Shape, color: ColorId) -> Self {
        let matrix = PieceMatrix::from_shape(shape, color);
        Self {
            color,
            matrix,
            row: 0,
            col: Self::spawn_col(shape.cols()),
        }
    }

    /// `floor(BOARD_WIDTH / 2) - floor(width / 2)`.
    pub fn spawn_col(width: u8) -> i8 {
        (BOARD_WIDTH / 2) as i8 - (width / 2) as i8
    }

    /// The piece with its matrix rotated once clockwise; the anchor is kept.
    pub fn rotate(&self) -> Self {
        Self {
            matrix: self.matrix.rotated(),
            ..*self
        }
    }

    /// Rotate clockwise `times` times.
    pub fn rotated(&self, times: u8) -> Self {
        (0..times).fold(*self, |piece, _| piece.rotate())
    }

    /// The piece shifted by `(drow, dcol)`.
    pub fn translated(&self, drow: i8, dcol: i8) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..*self
        }
    }

    /// Occupied cells as `(row, col, color)` in the local frame.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, ColorId)> + '_ {
        self.matrix.occupied()
    }

    /// Occupied cells as `(row, col, color)` in board coordinates.
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8, ColorId)> + '_ {
        self.matrix
            .occupied()
            .map(move |(r, c, color)| (self.row + r, self.col + c, color))
    }
}
