//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key press
//! yields at most one command; terminal auto-repeat is left to the caller to
//! filter (see `KeyEventKind::Repeat`).

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_restart, should_quit};
