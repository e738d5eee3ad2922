//! Shape catalog and piece rotation tests

use blockfall::core::{get_shape, Piece, SHAPES};
use blockfall::types::{Cell, ColorId, ShapeKind, BOARD_WIDTH};

fn occupied(piece: &Piece) -> Vec<(i8, i8)> {
    piece.cells().map(|(r, c, _)| (r, c)).collect()
}

#[test]
fn test_shape_dimensions() {
    let dims: Vec<_> = SHAPES.iter().map(|s| (s.kind(), s.rows(), s.cols())).collect();
    assert_eq!(
        dims,
        vec![
            (ShapeKind::I, 1, 4),
            (ShapeKind::O, 2, 2),
            (ShapeKind::Z, 2, 3),
            (ShapeKind::S, 2, 3),
            (ShapeKind::T, 2, 3),
            (ShapeKind::L, 2, 3),
            (ShapeKind::J, 2, 3),
        ]
    );
}

#[test]
fn test_spawn_is_centered() {
    for shape in SHAPES.iter() {
        let piece = Piece::spawn(shape, ColorId::new(0).unwrap());
        let expected = (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8;
        assert_eq!(piece.row, 0);
        assert_eq!(piece.col, expected, "{:?}", shape.kind());
    }
}

#[test]
fn test_t_rotation_sequence() {
    let piece = Piece::spawn(get_shape(ShapeKind::T), ColorId::new(4).unwrap());
    // [[1,1,1],[0,1,0]]
    assert_eq!(occupied(&piece), vec![(0, 0), (0, 1), (0, 2), (1, 1)]);

    // [[0,1],[1,1],[0,1]]
    let r1 = piece.rotate();
    assert_eq!(occupied(&r1), vec![(0, 1), (1, 0), (1, 1), (2, 1)]);

    // [[0,1,0],[1,1,1]]
    let r2 = r1.rotate();
    assert_eq!(occupied(&r2), vec![(0, 1), (1, 0), (1, 1), (1, 2)]);

    // [[1,0],[1,1],[1,0]]
    let r3 = r2.rotate();
    assert_eq!(occupied(&r3), vec![(0, 0), (1, 0), (1, 1), (2, 0)]);

    assert_eq!(r3.rotate(), piece);
}

#[test]
fn test_rotation_keeps_anchor_and_color() {
    let color = ColorId::new(6).unwrap();
    let piece = Piece::spawn(get_shape(ShapeKind::J), color).translated(7, -2);
    let rotated = piece.rotate();

    assert_eq!((rotated.row, rotated.col), (7, 2));
    assert_eq!(rotated.color, color);
    assert!(rotated.cells().all(|(_, _, c)| c == color));
    // [[0,1],[0,1],[1,1]]
    assert_eq!(rotated.matrix.get(0, 0), Cell::Empty);
    assert_eq!(rotated.matrix.get(0, 1), Cell::Color(color));
}

#[test]
fn test_rotation_involution_every_shape_and_color() {
    for shape in SHAPES.iter() {
        for color in ColorId::all() {
            let piece = Piece::spawn(shape, color);
            let mut p = piece;
            for _ in 0..4 {
                p = p.rotate();
            }
            assert_eq!(p, piece, "{:?} color {}", shape.kind(), color.index());
            assert_eq!(p.matrix, piece.matrix);
        }
    }
}

#[test]
fn test_o_rotation_is_stationary() {
    let piece = Piece::spawn(get_shape(ShapeKind::O), ColorId::new(1).unwrap());
    assert_eq!(piece.rotate(), piece);
}
