//! Board module - the grid of locked cells
//!
//! A 10x20 grid stored as a flat row-major array. Coordinates are `(row, col)`
//! with row 0 at the top. The board owns collision probing, merging a piece
//! into the grid, and clearing full rows.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row-major 2-D view of the board, as used by snapshots.
pub type Grid = [[Cell; WIDTH]; HEIGHT];

/// Row indices removed by one clear, top to bottom.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Build a board from a row-major grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut board = Self::new();
        for (row, src) in grid.iter().enumerate() {
            board.row_mut(row).copy_from_slice(src);
        }
        board
    }

    /// Copy the board out as a row-major grid.
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[Cell::Empty; WIDTH]; HEIGHT];
        self.write_grid(&mut grid);
        grid
    }

    /// Write the board into an existing grid (no allocation).
    pub fn write_grid(&self, out: &mut Grid) {
        for (row, dst) in out.iter_mut().enumerate() {
            dst.copy_from_slice(self.row(row));
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some(row as usize * WIDTH + col as usize)
    }

    fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * WIDTH..(row + 1) * WIDTH]
    }

    fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        &mut self.cells[row * WIDTH..(row + 1) * WIDTH]
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at `(row, col)`. Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff the cell holds the empty tag.
    pub fn is_empty(value: Cell) -> bool {
        value.is_empty()
    }

    /// Whether `piece`, shifted by `offset = (drow, dcol)`, would hit a wall,
    /// the floor, or a locked cell.
    ///
    /// Cells above the top edge (`row < 0`) are only checked against the side
    /// walls, never against board contents: a piece may legally poke out of
    /// the top of the grid.
    pub fn check_collision(&self, piece: &Piece, offset: (i8, i8)) -> bool {
        let (drow, dcol) = offset;
        piece.board_cells().any(|(row, col, _)| {
            let row = row + drow;
            let col = col + dcol;
            if col < 0 || col >= BOARD_WIDTH as i8 || row >= BOARD_HEIGHT as i8 {
                return true;
            }
            row >= 0 && !Self::is_empty(self.cells[row as usize * WIDTH + col as usize])
        })
    }

    /// Write every occupied cell of `piece` into the grid with its color tag.
    ///
    /// The caller must have checked `check_collision(piece, (0, 0))` first.
    /// Cells that fall outside the grid are skipped.
    pub fn merge(&mut self, piece: &Piece) {
        for (row, col, color) in piece.board_cells() {
            self.set(row, col, Cell::Color(color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < HEIGHT && self.row(row).iter().all(|cell| cell.is_occupied())
    }

    /// Remove every full row in one pass and drop the rows above into place.
    ///
    /// Non-full rows keep their relative order; an equal number of empty rows
    /// appear at the top. Returns the removed row indices, top to bottom.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_row = HEIGHT;

        // Two-pointer compaction from the bottom up.
        for read_row in (0..HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                self.cells.copy_within(
                    read_row * WIDTH..(read_row + 1) * WIDTH,
                    write_row * WIDTH,
                );
            }
        }

        self.cells[..write_row * WIDTH].fill(Cell::Empty);

        cleared.reverse();
        cleared
    }

    /// Clear all full rows and return how many were removed.
    pub fn clear_full_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
