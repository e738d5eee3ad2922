//! Display palette: the only place color ids become colors.

use crate::fb::Rgb;
use crate::types::{ColorId, PALETTE_SIZE};

/// Red, green, blue, cyan, magenta, yellow, orange.
pub const PALETTE: [Rgb; PALETTE_SIZE as usize] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 165, 0),
];

pub fn color_for(id: ColorId) -> Rgb {
    PALETTE[id.index() as usize]
}
