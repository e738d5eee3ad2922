//! Terminal rendering for the falling-block game.
//!
//! The simulation hands over a [`core::GameSnapshot`]; this crate turns it into
//! a framebuffer (pure, testable) and flushes that framebuffer to the terminal
//! with crossterm. Color ids are resolved through [`palette`] here and nowhere
//! else.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use palette::{color_for, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
