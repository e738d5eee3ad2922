//! Shared types and constants for the falling-block engine.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the core simulation, the input mapper, and the terminal renderer
//! alike.
//!
//! # Board Dimensions
//!
//! The playfield is 10 columns by 20 rows (a 300x600 pixel field at 30 pixel
//! blocks). Coordinates are `(row, col)` with row 0 at the top.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 500 | Gravity step period |
//! | `TICK_MS` | 16 | Default frame period of the terminal shell |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, ColorId, GameAction, BOARD_WIDTH};
//!
//! let color = ColorId::new(3).unwrap();
//! assert!(Cell::Color(color).is_occupied());
//! assert!(Cell::Empty.is_empty());
//!
//! assert_eq!(GameAction::MoveLeft.offset(), Some((0, -1)));
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Board width in cells.
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells.
pub const BOARD_HEIGHT: u8 = 20;

/// Number of entries in the display palette. Valid color ids are `0..PALETTE_SIZE`.
pub const PALETTE_SIZE: u8 = 7;

/// Gravity interval: the piece falls one row once the accumulated time exceeds this.
pub const FALL_INTERVAL_MS: u32 = 500;

/// Default frame period for the terminal shell (~60 FPS).
pub const TICK_MS: u32 = 16;

/// Largest row/column extent of any shape in the catalog.
pub const MAX_SHAPE_DIM: usize = 4;

/// Index into the display palette.
///
/// The simulation treats this purely as a tag; mapping it to an actual color
/// is the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorId(u8);

impl ColorId {
    /// Create a color id, rejecting values outside the palette.
    pub const fn new(id: u8) -> Option<Self> {
        if id < PALETTE_SIZE {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Create a color id from any index, wrapping into the palette.
    pub const fn wrapping(index: u8) -> Self {
        Self(index % PALETTE_SIZE)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// All valid color ids in palette order.
    pub fn all() -> impl Iterator<Item = ColorId> {
        (0..PALETTE_SIZE).map(ColorId)
    }
}

/// A single board cell: empty or locked with a color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Color(ColorId),
}

impl Cell {
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline(always)]
    pub const fn is_occupied(self) -> bool {
        !self.is_empty()
    }

    /// The color tag, if occupied.
    pub const fn color(self) -> Option<ColorId> {
        match self {
            Cell::Empty => None,
            Cell::Color(c) => Some(c),
        }
    }
}

/// The seven canonical shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    Z,
    S,
    T,
    L,
    J,
}

impl ShapeKind {
    /// Catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
    ];
}

/// Player commands accepted by the engine while a piece is falling.
///
/// Each command is applied once per occurrence; there is no auto-repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the piece one column left.
    MoveLeft,
    /// Shift the piece one column right.
    MoveRight,
    /// Move the piece one row down. Never locks the piece.
    SoftDrop,
    /// Rotate 90° clockwise about the fixed anchor.
    Rotate,
}

impl GameAction {
    /// Target offset `(drow, dcol)` probed before a translation commits.
    /// `None` for rotation, which probes with a new matrix instead.
    pub fn offset(&self) -> Option<(i8, i8)> {
        match self {
            GameAction::MoveLeft => Some((0, -1)),
            GameAction::MoveRight => Some((0, 1)),
            GameAction::SoftDrop => Some((1, 0)),
            GameAction::Rotate => None,
        }
    }
}

/// Emitted each time a piece locks into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Id of the piece that locked.
    pub piece_id: u32,
    /// Full rows removed by this lock.
    pub lines_cleared: u32,
    /// The piece spawned after the lock collided immediately.
    pub topped_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_id_rejects_out_of_palette() {
        assert!(ColorId::new(0).is_some());
        assert!(ColorId::new(PALETTE_SIZE - 1).is_some());
        assert!(ColorId::new(PALETTE_SIZE).is_none());
        assert_eq!(ColorId::all().count(), PALETTE_SIZE as usize);
        assert_eq!(ColorId::wrapping(PALETTE_SIZE + 1).index(), 1);
    }

    #[test]
    fn cell_color_tag() {
        let c = ColorId::new(2).unwrap();
        assert_eq!(Cell::Color(c).color(), Some(c));
        assert_eq!(Cell::Empty.color(), None);
        assert_eq!(Cell::default(), Cell::Empty);
    }

    #[test]
    fn action_offsets() {
        assert_eq!(GameAction::MoveLeft.offset(), Some((0, -1)));
        assert_eq!(GameAction::MoveRight.offset(), Some((0, 1)));
        assert_eq!(GameAction::SoftDrop.offset(), Some((1, 0)));
        assert_eq!(GameAction::Rotate.offset(), None);
    }
}
