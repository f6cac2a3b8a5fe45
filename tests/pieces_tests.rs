//! Piece catalog tests - templates, rotation counts and column offsets

use tetromino::core::{column_offset, rotation_count, template, templates, Piece};
use tetromino::types::{Color, PieceKind, SPAWN_X, SPAWN_Y};

fn cells_of(kind: PieceKind, rotation: u8) -> Vec<(i8, i8)> {
    template(kind, rotation).cells().collect()
}

// ============== Template Tests ==============

#[test]
fn test_i_piece_templates() {
    assert_eq!(cells_of(PieceKind::I, 0), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    assert_eq!(cells_of(PieceKind::I, 1), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
}

#[test]
fn test_o_piece_template() {
    assert_eq!(templates(PieceKind::O).len(), 1);
    assert_eq!(cells_of(PieceKind::O, 0), vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
    // Any rotation index maps onto the single state
    assert_eq!(cells_of(PieceKind::O, 3), cells_of(PieceKind::O, 0));
}

#[test]
fn test_s_and_z_templates() {
    assert_eq!(cells_of(PieceKind::S, 0), vec![(2, 2), (3, 2), (1, 3), (2, 3)]);
    assert_eq!(cells_of(PieceKind::S, 1), vec![(2, 1), (2, 2), (3, 2), (3, 3)]);
    assert_eq!(cells_of(PieceKind::Z, 0), vec![(1, 2), (2, 2), (2, 3), (3, 3)]);
    assert_eq!(cells_of(PieceKind::Z, 1), vec![(2, 1), (1, 2), (2, 2), (1, 3)]);
}

#[test]
fn test_j_templates() {
    assert_eq!(cells_of(PieceKind::J, 0), vec![(1, 1), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(cells_of(PieceKind::J, 1), vec![(2, 1), (3, 1), (2, 2), (2, 3)]);
    assert_eq!(cells_of(PieceKind::J, 2), vec![(1, 2), (2, 2), (3, 2), (3, 3)]);
    assert_eq!(cells_of(PieceKind::J, 3), vec![(2, 1), (2, 2), (1, 3), (2, 3)]);
}

#[test]
fn test_l_templates() {
    assert_eq!(cells_of(PieceKind::L, 0), vec![(3, 1), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(cells_of(PieceKind::L, 1), vec![(2, 1), (2, 2), (2, 3), (3, 3)]);
    assert_eq!(cells_of(PieceKind::L, 2), vec![(1, 2), (2, 2), (3, 2), (1, 3)]);
    assert_eq!(cells_of(PieceKind::L, 3), vec![(1, 1), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_t_templates() {
    assert_eq!(cells_of(PieceKind::T, 0), vec![(2, 1), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(cells_of(PieceKind::T, 1), vec![(2, 1), (2, 2), (3, 2), (2, 3)]);
    assert_eq!(cells_of(PieceKind::T, 2), vec![(1, 2), (2, 2), (3, 2), (2, 3)]);
    assert_eq!(cells_of(PieceKind::T, 3), vec![(2, 1), (1, 2), (2, 2), (2, 3)]);
}

#[test]
fn test_templates_are_distinct_per_kind() {
    for kind in PieceKind::ALL {
        let list = templates(kind);
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                assert_ne!(a, b, "{:?} repeats a rotation state", kind);
            }
        }
        assert_eq!(list.len(), rotation_count(kind) as usize);
    }
}

// ============== Column Offset Tests ==============

#[test]
fn test_column_offset_is_leftmost_filled_column() {
    for kind in PieceKind::ALL {
        for rotation in 0..rotation_count(kind) {
            let leftmost = cells_of(kind, rotation)
                .into_iter()
                .map(|(tx, _)| tx)
                .min()
                .unwrap();
            assert_eq!(column_offset(kind, rotation), leftmost, "{:?}/{}", kind, rotation);
        }
    }
}

// ============== Piece Value Tests ==============

#[test]
fn test_spawn_position() {
    let piece = Piece::spawn(PieceKind::L, 2);
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(piece.rotation, 2);
    assert_eq!(piece.color(), Color::Blue);
}

#[test]
fn test_with_rotation_normalises() {
    let piece = Piece::spawn(PieceKind::Z, 0).with_rotation(5);
    assert_eq!(piece.rotation, 1);

    let piece = Piece::spawn(PieceKind::T, 0).with_rotation(7);
    assert_eq!(piece.rotation, 3);
}

#[test]
fn test_shifted_moves_anchor() {
    let piece = Piece::spawn(PieceKind::I, 1).shifted(-2, 5);
    assert_eq!((piece.x, piece.y), (SPAWN_X - 2, SPAWN_Y + 5));
    assert_eq!(piece.kind, PieceKind::I);
    assert_eq!(piece.rotation, 1);
}
