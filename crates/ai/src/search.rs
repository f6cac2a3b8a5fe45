//! Best-move search - single-ply greedy minimiser over the heuristic.
//!
//! Every (rotation, column) candidate for the current piece is simulated on
//! its own board copy and scored. Enumeration order is rotation ascending,
//! then column ascending; ties keep the first candidate found.

use arrayvec::ArrayVec;

use crate::core::{rotation_count, Board, Piece};
use crate::eval::{evaluate, Penalty};
use crate::landing::drop_to;
use crate::types::{BOARD_WIDTH, MAX_ROTATIONS};

/// Most candidates any piece can produce (4 rotations x 10 columns)
pub const MAX_CANDIDATES: usize = MAX_ROTATIONS * BOARD_WIDTH as usize;

/// Score given to candidates that could not be placed.
pub const UNPLACEABLE: u32 = u32::MAX;

/// A candidate placement: leftmost board column and rotation index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: u8,
    pub rotation: u8,
}

/// A candidate together with how it scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    /// Breakdown for placed candidates, `None` when skipped
    pub penalty: Option<Penalty>,
}

impl ScoredMove {
    /// Total penalty, or [`UNPLACEABLE`] for a skipped candidate
    pub fn score(&self) -> u32 {
        self.penalty.map_or(UNPLACEABLE, |p| p.total())
    }

    pub fn is_placeable(&self) -> bool {
        self.penalty.is_some()
    }
}

/// Score every candidate for `piece`, in enumeration order.
pub fn rank_moves(board: &Board, piece: &Piece) -> ArrayVec<ScoredMove, MAX_CANDIDATES> {
    let mut ranked = ArrayVec::new();
    for rotation in 0..rotation_count(piece.kind) {
        for column in 0..BOARD_WIDTH {
            let landing = drop_to(board, piece, column, rotation);
            let penalty = landing.landed.then(|| evaluate(&landing.board));
            ranked.push(ScoredMove {
                mv: Move { column, rotation },
                penalty,
            });
        }
    }
    ranked
}

/// The candidate with the lowest total penalty.
///
/// Returns `None` when no candidate can be placed at all; the caller must not
/// try to apply anything in that case.
pub fn best_move(board: &Board, piece: &Piece) -> Option<Move> {
    best_scored(board, piece).map(|scored| scored.mv)
}

/// Like [`best_move`], keeping the winning penalty.
pub fn best_scored(board: &Board, piece: &Piece) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in rank_moves(board, piece) {
        if !candidate.is_placeable() {
            continue;
        }
        // Strict comparison: the first of equal candidates wins.
        if best.map_or(true, |b| candidate.score() < b.score()) {
            best = Some(candidate);
        }
    }
    best
}
