//! Core game model - pure, deterministic, and testable
//!
//! This crate holds the static data and value types the placement search works
//! on. It has **zero dependencies** on rendering, input or I/O.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with occupancy queries, piece placement and line clearing
//! - [`pieces`]: 5x5 rotation templates, the column-offset table, and the [`Piece`] value
//! - [`rng`]: 7-bag piece sequencing owned by the host
//!
//! # Example
//!
//! ```
//! use tetromino_core::{Board, Piece};
//! use tetromino_core::types::PieceKind;
//!
//! let mut board = Board::new();
//! let piece = Piece::new(PieceKind::O, 0, 3, 16);
//! board.place(&piece);
//!
//! assert!(board.is_occupied(4, 18));
//! assert!(board.is_occupied(5, 19));
//! assert_eq!(board.filled_count(), 4);
//! ```

pub mod board;
pub mod pieces;
pub mod rng;

pub use tetromino_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use pieces::{column_offset, rotation_count, template, templates, Piece, Template};
pub use rng::{PieceQueue, SimpleRng, PREVIEW_LEN};
