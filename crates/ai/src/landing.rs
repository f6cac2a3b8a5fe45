//! Drop simulator - where a piece comes to rest for a (column, rotation).
//!
//! The requested column names the leftmost occupied column of the piece, so
//! the anchor is shifted by the per-rotation offset from the piece catalog.
//! Simulation always works on a cloned board.

use crate::collision::is_legal;
use crate::core::{column_offset, Board, Piece};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Upper bound on downward probes.
///
/// Every template has an occupied cell in row 2 or below, so a piece
/// anchored at or below the spawn row meets the floor within this many
/// rows. A longer probe means the collision check is broken.
pub const MAX_DROP: i8 = BOARD_HEIGHT as i8;

/// Result of simulating one candidate placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landing {
    /// Resting piece, or the untouched input piece when skipped
    pub piece: Piece,
    /// Board with the piece written in, or an unchanged copy when skipped
    pub board: Board,
    /// False when the candidate was illegal at its starting height
    pub landed: bool,
}

/// How far `piece` can fall from where it is.
///
/// Returns the last legal downward offset. The piece must itself be legal.
///
/// # Panics
///
/// Panics if no illegal offset is found within [`MAX_DROP`] rows.
pub fn drop_distance(board: &Board, piece: &Piece) -> i8 {
    for dy in 1..=MAX_DROP {
        if !is_legal(board, piece, 0, dy) {
            return dy - 1;
        }
    }
    panic!(
        "drop probe for {:?} at ({}, {}) found no floor within {} rows",
        piece.kind, piece.x, piece.y, MAX_DROP
    );
}

/// Rotate `piece`, align it with `column`, and let it fall.
///
/// Illegal candidates are skipped rather than reported as errors: the result
/// carries the input piece and an identical board with `landed == false`.
/// The board passed in is never modified.
pub fn drop_to(board: &Board, piece: &Piece, column: u8, rotation: u8) -> Landing {
    let skipped = || Landing {
        piece: *piece,
        board: board.clone(),
        landed: false,
    };
    if column >= BOARD_WIDTH {
        return skipped();
    }

    let mut working = piece.with_rotation(rotation);
    working.x = column as i8 - column_offset(working.kind, working.rotation);

    if !is_legal(board, &working, 0, 0) {
        return skipped();
    }

    working.y += drop_distance(board, &working);

    let mut result = board.clone();
    result.place(&working);
    Landing {
        piece: working,
        board: result,
        landed: true,
    }
}
