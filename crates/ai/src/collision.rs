//! Collision oracle - decides whether a piece may occupy a position.

use crate::core::{Board, Piece};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `piece`, shifted by (dx, dy), fits on `board`.
///
/// Cells above the top edge never cause rejection. Any other occupied
/// template cell must land inside the side walls, above the floor, and on an
/// empty board cell. Neither the board nor the piece is modified.
pub fn is_legal(board: &Board, piece: &Piece, dx: i8, dy: i8) -> bool {
    piece.template().cells().all(|(tx, ty)| {
        let ax = piece.x as i16 + tx as i16 + dx as i16;
        let ay = piece.y as i16 + ty as i16 + dy as i16;
        if ay < 0 {
            return true;
        }
        if ax < 0 || ax >= BOARD_WIDTH as i16 || ay >= BOARD_HEIGHT as i16 {
            return false;
        }
        !board.is_occupied(ax as i8, ay as i8)
    })
}
