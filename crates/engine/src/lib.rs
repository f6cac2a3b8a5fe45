//! Host side of the game: the live board, piece sequencing, and commits.
//!
//! [`Session`] owns the canonical state. [`autoplay_step`] asks the search
//! for a move and applies it; [`apply_place`] applies a move chosen
//! elsewhere. Both leave the live board untouched when the move cannot be
//! placed.
//!
//! ```
//! use tetromino_engine::{autoplay_step, Session};
//!
//! let mut game = Session::new(12345);
//! game.start();
//! for _ in 0..10 {
//!     autoplay_step(&mut game).unwrap();
//! }
//! assert_eq!(game.pieces_placed(), 10);
//! ```

pub mod place;
pub mod session;

pub use tetromino_ai as ai;
pub use tetromino_core as core;
pub use tetromino_types as types;

pub use place::{apply_place, autoplay_step, PlaceError};
pub use session::{Session, StepReport, LINES_PER_LEVEL};
