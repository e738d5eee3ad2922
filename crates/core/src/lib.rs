//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole simulation: the shape catalog, live pieces, the
//! board, and the piece lifecycle. It has no dependency on terminals, windows
//! or clocks; callers feed it commands and elapsed time and read back a
//! [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven canonical shape matrices and random selection
//! - [`piece`]: colored piece matrices, spawn placement and rotation
//! - [`board`]: 10x20 grid with collision probing, merging and line clearing
//! - [`game_state`]: spawn / move / rotate / gravity / lock / game over
//! - [`rng`]: seeded LCG and the piece generator
//! - [`snapshot`]: read-only frame for renderers
//!
//! # Rules
//!
//! - Pieces spawn on row 0, horizontally centered.
//! - Left, right and down moves commit only if the target is clear.
//! - Rotation is 90° clockwise about the fixed top-left anchor, with no kicks;
//!   a blocked rotation is undone.
//! - Gravity moves the piece down once the fall timer exceeds 500 ms; a piece
//!   that cannot fall is merged, full rows are cleared, and the next piece
//!   spawns. If it cannot spawn, the game is over.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick(16);
//!
//! let frame = game.snapshot();
//! assert!(frame.active.is_some());
//! assert!(!frame.game_over);
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, Grid};
pub use game_state::{GamePhase, GameState};
pub use piece::{Piece, PieceMatrix};
pub use rng::{PieceGenerator, SimpleRng};
pub use shapes::{get_shape, pick_random_shape, Shape, SHAPES};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
