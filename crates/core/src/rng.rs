//! RNG module - seeded piece generation
//!
//! Every spawn draws a shape uniformly from the catalog and, independently, a
//! color id uniformly from the palette. Both come from one deterministic LCG so
//! a seed fully determines the piece stream.

use crate::shapes::{pick_random_shape, Shape};
use crate::types::{ColorId, PALETTE_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is treated as 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Source of the shape and color for each new piece.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    seed: u32,
}

impl PieceGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Draw the next `(shape, color)` pair.
    pub fn next_piece(&mut self) -> (Shape, ColorId) {
        let shape = pick_random_shape(&mut self.rng);
        let color = self.next_color();
        (shape, color)
    }

    fn next_color(&mut self) -> ColorId {
        ColorId::wrapping(self.rng.next_range(PALETTE_SIZE as u32) as u8)
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_generator_same_seed_same_stream() {
        let mut a = PieceGenerator::new(99);
        let mut b = PieceGenerator::new(99);
        for _ in 0..50 {
            let (sa, ca) = a.next_piece();
            let (sb, cb) = b.next_piece();
            assert_eq!(sa.kind(), sb.kind());
            assert_eq!(ca, cb);
        }
    }

    #[test]
    fn test_generator_covers_catalog_and_palette() {
        let mut generator = PieceGenerator::new(2024);
        let mut kinds = Vec::new();
        let mut colors = Vec::new();
        for _ in 0..500 {
            let (shape, color) = generator.next_piece();
            if !kinds.contains(&shape.kind()) {
                kinds.push(shape.kind());
            }
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        for kind in ShapeKind::ALL {
            assert!(kinds.contains(&kind), "Missing shape: {:?}", kind);
        }
        assert_eq!(colors.len(), PALETTE_SIZE as usize);
    }
}
