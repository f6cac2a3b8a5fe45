//! Placement search for the automated player.
//!
//! Given a board and the falling piece, the search simulates every final
//! resting position across all rotations and columns, scores each resulting
//! board with a fixed heuristic, and picks the placement with the lowest
//! penalty. It looks at the current piece only.
//!
//! # Module Structure
//!
//! - [`collision`]: legality of a piece at an offset
//! - [`landing`]: drop simulation for one (column, rotation) candidate
//! - [`eval`]: height and hole penalties
//! - [`search`]: candidate enumeration and argmin
//!
//! Every candidate works on its own board clone, so the search is pure with
//! respect to the caller's board and gives the same answer every time.
//!
//! # Example
//!
//! ```
//! use tetromino_ai::{best_move, drop_to};
//! use tetromino_core::{Board, Piece};
//! use tetromino_core::types::PieceKind;
//!
//! let board = Board::new();
//! let piece = Piece::spawn(PieceKind::L, 0);
//!
//! let mv = best_move(&board, &piece).expect("empty board always has a move");
//! let landing = drop_to(&board, &piece, mv.column, mv.rotation);
//! assert!(landing.landed);
//! assert_eq!(landing.board.filled_count(), 4);
//! ```

pub mod collision;
pub mod eval;
pub mod landing;
pub mod search;

pub use tetromino_core as core;
pub use tetromino_types as types;

pub use collision::is_legal;
pub use eval::{evaluate, height_penalty, hole_count, total_penalty, Penalty};
pub use landing::{drop_distance, drop_to, Landing, MAX_DROP};
pub use search::{
    best_move, best_scored, rank_moves, Move, ScoredMove, MAX_CANDIDATES, UNPLACEABLE,
};
