//! Heuristic evaluator - scores a board after a piece has been written in.
//!
//! Lower is better. Line clears are not applied before scoring.
//!
//! - **Height**: every filled cell at row `y` costs `(H - y) * HEIGHT_WEIGHTS[y]`,
//!   so cells near the top are far more expensive than cells near the floor.
//! - **Holes**: every empty cell with a filled cell anywhere above it in the same
//!   column costs [`HOLE_PENALTY`].

use crate::core::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, HEIGHT_WEIGHTS, HOLE_PENALTY};

/// Penalty breakdown for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Penalty {
    /// Summed per-cell height cost
    pub height: u32,
    /// Number of holes (not yet multiplied by [`HOLE_PENALTY`])
    pub holes: u32,
}

impl Penalty {
    pub fn hole_penalty(&self) -> u32 {
        self.holes * HOLE_PENALTY
    }

    /// Height penalty plus hole penalty
    pub fn total(&self) -> u32 {
        self.height + self.hole_penalty()
    }
}

pub fn height_penalty(board: &Board) -> u32 {
    let mut penalty = 0;
    for y in 0..BOARD_HEIGHT as usize {
        let filled = board.row(y).iter().filter(|cell| cell.is_some()).count() as u32;
        penalty += filled * (BOARD_HEIGHT as u32 - y as u32) * HEIGHT_WEIGHTS[y];
    }
    penalty
}

/// Count empty cells that are covered by a filled cell higher in their column.
pub fn hole_count(board: &Board) -> u32 {
    let mut holes = 0;
    for x in 0..BOARD_WIDTH as i8 {
        let mut covered = false;
        for y in 0..BOARD_HEIGHT as i8 {
            if board.is_occupied(x, y) {
                covered = true;
            } else if covered {
                holes += 1;
            }
        }
    }
    holes
}

pub fn evaluate(board: &Board) -> Penalty {
    Penalty {
        height: height_penalty(board),
        holes: hole_count(board),
    }
}

pub fn total_penalty(board: &Board) -> u32 {
    evaluate(board).total()
}
