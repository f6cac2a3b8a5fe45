//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the board model, the placement search and the host session alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Templates**: every rotation state is a 5x5 occupancy mask
//! - **Spawn anchor**: (3, -2), i.e. the template starts two rows above the board
//!
//! # Heuristic Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `HEIGHT_WEIGHTS` | 100, 95, ..., 5, 0 | Per-row weight, indexed by row |
//! | `HOLE_PENALTY` | 350 | Cost of one covered empty cell |
//!
//! # Examples
//!
//! ```
//! use tetromino_types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::T;
//! assert_eq!(kind.as_str(), "T");
//! assert_eq!(kind.color(), Color::Gray);
//! assert_eq!(Color::Gray.index(), 6);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of a rotation template (5x5)
pub const TEMPLATE_SIZE: u8 = 5;

/// Horizontal spawn anchor: the template is centred on the board.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - (TEMPLATE_SIZE / 2) as i8;

/// Vertical spawn anchor (partially above the visible board).
pub const SPAWN_Y: i8 = -2;

/// Maximum number of rotation states any kind has.
pub const MAX_ROTATIONS: usize = 4;

/// Row weights for the height penalty, indexed by row (0 = top).
///
/// Evenly decreasing in steps of 5. The table has one entry more than the
/// board has rows; the trailing 0 is never reached by an in-bounds cell.
pub const HEIGHT_WEIGHTS: [u32; BOARD_HEIGHT as usize + 1] = [
    100, 95, 90, 85, 80, 75, 70, 65, 60, 55, 50, 45, 40, 35, 30, 25, 20, 15, 10, 5, 0,
];

/// Cost of a single hole (an empty cell with a filled cell somewhere above it).
pub const HOLE_PENALTY: u32 = 350;


/// The seven tetromino piece kinds
///
/// Declaration order is the catalog order used by lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    S,
    Z,
    I,
    O,
    J,
    L,
    T,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::T => "T",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Fixed color for this kind. No two kinds share a color.
    pub const fn color(self) -> Color {
        match self {
            PieceKind::S => Color::Red,
            PieceKind::Z => Color::Green,
            PieceKind::L => Color::Blue,
            PieceKind::J => Color::Yellow,
            PieceKind::I => Color::Purple,
            PieceKind::O => Color::Orange,
            PieceKind::T => Color::Gray,
        }
    }
}

/// The seven color slots a filled cell can hold.
///
/// Discriminants are the color indices 0-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue = 0,
    Green = 1,
    Red = 2,
    Yellow = 3,
    Orange = 4,
    Purple = 5,
    Gray = 6,
}

impl Color {
    /// Color index (0-6)
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Color::index`].
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Color::Blue),
            1 => Some(Color::Green),
            2 => Some(Color::Red),
            3 => Some(Color::Yellow),
            4 => Some(Color::Orange),
            5 => Some(Color::Purple),
            6 => Some(Color::Gray),
            _ => None,
        }
    }

    /// Single-character glyph used by ASCII board dumps.
    pub fn glyph(self) -> char {
        (b'0' + self.index()) as char
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled with the given color
///
/// These are exactly the eight valid cell states.
pub type Cell = Option<Color>;
