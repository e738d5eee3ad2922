//! Shape catalog - the seven canonical piece geometries
//!
//! Each shape is a small 0/1 occupancy matrix in its own local frame, stored in
//! a fixed 4x4 array with explicit row/column extents. Unused cells are always
//! `false`, so two shapes compare equal iff their geometry is identical.

use crate::rng::SimpleRng;
use crate::types::{ShapeKind, MAX_SHAPE_DIM};

type Mask = [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

/// Immutable geometric template for a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    rows: u8,
    cols: u8,
    mask: Mask,
}

impl Shape {
    const fn build(kind: ShapeKind, rows: u8, cols: u8, mask: Mask) -> Self {
        Self {
            kind,
            rows,
            cols,
            mask,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Height of the matrix.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Width of the matrix.
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether local cell `(row, col)` is occupied. Out-of-range is `false`.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.mask[row][col]
    }

    /// Number of occupied cells.
    pub fn block_count(&self) -> usize {
        self.mask.iter().flatten().filter(|&&b| b).count()
    }
}

const O: bool = false;
const X: bool = true;

const I_SHAPE: Shape = Shape::build(
    ShapeKind::I,
    1,
    4,
    [[X, X, X, X], [O; 4], [O; 4], [O; 4]],
);

const O_SHAPE: Shape = Shape::build(
    ShapeKind::O,
    2,
    2,
    [[X, X, O, O], [X, X, O, O], [O; 4], [O; 4]],
);

const Z_SHAPE: Shape = Shape::build(
    ShapeKind::Z,
    2,
    3,
    [[X, X, O, O], [O, X, X, O], [O; 4], [O; 4]],
);

const S_SHAPE: Shape = Shape::build(
    ShapeKind::S,
    2,
    3,
    [[O, X, X, O], [X, X, O, O], [O; 4], [O; 4]],
);

const T_SHAPE: Shape = Shape::build(
    ShapeKind::T,
    2,
    3,
    [[X, X, X, O], [O, X, O, O], [O; 4], [O; 4]],
);

const L_SHAPE: Shape = Shape::build(
    ShapeKind::L,
    2,
    3,
    [[X, X, X, O], [X, O, O, O], [O; 4], [O; 4]],
);

const J_SHAPE: Shape = Shape::build(
    ShapeKind::J,
    2,
    3,
    [[X, X, X, O], [O, O, X, O], [O; 4], [O; 4]],
);

/// The full catalog, in `ShapeKind::ALL` order.
pub static SHAPES: [Shape; 7] = [
    I_SHAPE, O_SHAPE, Z_SHAPE, S_SHAPE, T_SHAPE, L_SHAPE, J_SHAPE,
];

/// Look up the template for a shape kind.
pub fn get_shape(kind: ShapeKind) -> &'static Shape {
    match kind {
        ShapeKind::I => &SHAPES[0],
        ShapeKind::O => &SHAPES[1],
        ShapeKind::Z => &SHAPES[2],
        ShapeKind::S => &SHAPES[3],
        ShapeKind::T => &SHAPES[4],
        ShapeKind::L => &SHAPES[5],
        ShapeKind::J => &SHAPES[6],
    }
}

/// Uniformly pick one of the seven shapes.
pub fn pick_random_shape(rng: &mut SimpleRng) -> Shape {
    SHAPES[rng.next_range(SHAPES.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_kinds() {
        for (shape, kind) in SHAPES.iter().zip(ShapeKind::ALL) {
            assert_eq!(shape.kind(), kind);
            assert_eq!(get_shape(kind), shape);
        }
    }

    #[test]
    fn test_every_shape_has_four_blocks() {
        for shape in SHAPES.iter() {
            assert_eq!(shape.block_count(), 4, "{:?}", shape.kind());
        }
    }

    #[test]
    fn test_padding_is_empty() {
        for shape in SHAPES.iter() {
            for r in 0..MAX_SHAPE_DIM {
                for c in 0..MAX_SHAPE_DIM {
                    if r >= shape.rows() as usize || c >= shape.cols() as usize {
                        assert!(!shape.mask[r][c], "{:?} ({}, {})", shape.kind(), r, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_z_geometry() {
        let z = get_shape(ShapeKind::Z);
        assert_eq!((z.rows(), z.cols()), (2, 3));
        assert!(z.is_filled(0, 0));
        assert!(z.is_filled(0, 1));
        assert!(!z.is_filled(0, 2));
        assert!(!z.is_filled(1, 0));
        assert!(z.is_filled(1, 1));
        assert!(z.is_filled(1, 2));
        assert!(!z.is_filled(5, 5));
    }

    #[test]
    fn test_pick_random_shape_is_deterministic() {
        let mut a = SimpleRng::new(3);
        let mut b = SimpleRng::new(3);
        for _ in 0..20 {
            assert_eq!(pick_random_shape(&mut a), pick_random_shape(&mut b));
        }
    }
}
