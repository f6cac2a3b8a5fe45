//! Pieces module - rotation templates and the falling-piece value type
//!
//! Every piece kind owns an ordered list of rotation states (1 for O, 2 for
//! S/Z/I, 4 for J/L/T). Each state is a 5x5 occupancy mask written out as ASCII
//! rows and compiled into a [`Template`] at build time, so the catalog is
//! immutable static data with no runtime initialisation.

use crate::types::{Color, PieceKind, MAX_ROTATIONS, SPAWN_X, SPAWN_Y, TEMPLATE_SIZE};

const SIZE: usize = TEMPLATE_SIZE as usize;

/// A 5x5 occupancy mask, indexed `[row][column]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    rows: [[bool; SIZE]; SIZE],
}

impl Template {
    /// Compile a template from five ASCII rows where `'O'` marks an occupied cell.
    pub const fn from_ascii(rows: [&str; SIZE]) -> Self {
        let mut out = [[false; SIZE]; SIZE];
        let mut y = 0;
        while y < SIZE {
            let row = rows[y].as_bytes();
            assert!(row.len() == SIZE, "template rows must be 5 wide");
            let mut x = 0;
            while x < SIZE {
                out[y][x] = row[x] == b'O';
                x += 1;
            }
            y += 1;
        }
        Self { rows: out }
    }

    /// Occupied cells as (tx, ty) offsets from the template's top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..SIZE).flat_map(move |ty| {
            (0..SIZE)
                .filter(move |&tx| self.rows[ty][tx])
                .map(move |tx| (tx as i8, ty as i8))
        })
    }

    /// Leftmost occupied template column, or 0 for an empty mask.
    pub const fn leftmost_column(&self) -> i8 {
        let mut x = 0;
        while x < SIZE {
            let mut y = 0;
            while y < SIZE {
                if self.rows[y][x] {
                    return x as i8;
                }
                y += 1;
            }
            x += 1;
        }
        0
    }
}

const S_TEMPLATES: [Template; 2] = [
    Template::from_ascii([".....", ".....", "..OO.", ".OO..", "....."]),
    Template::from_ascii([".....", "..O..", "..OO.", "...O.", "....."]),
];

const Z_TEMPLATES: [Template; 2] = [
    Template::from_ascii([".....", ".....", ".OO..", "..OO.", "....."]),
    Template::from_ascii([".....", "..O..", ".OO..", ".O...", "....."]),
];

const I_TEMPLATES: [Template; 2] = [
    Template::from_ascii(["..O..", "..O..", "..O..", "..O..", "....."]),
    Template::from_ascii([".....", ".....", "OOOO.", ".....", "....."]),
];

const O_TEMPLATES: [Template; 1] = [Template::from_ascii([
    ".....", ".....", ".OO..", ".OO..", ".....",
])];

const J_TEMPLATES: [Template; 4] = [
    Template::from_ascii([".....", ".O...", ".OOO.", ".....", "....."]),
    Template::from_ascii([".....", "..OO.", "..O..", "..O..", "....."]),
    Template::from_ascii([".....", ".....", ".OOO.", "...O.", "....."]),
    Template::from_ascii([".....", "..O..", "..O..", ".OO..", "....."]),
];

const L_TEMPLATES: [Template; 4] = [
    Template::from_ascii([".....", "...O.", ".OOO.", ".....", "....."]),
    Template::from_ascii([".....", "..O..", "..O..", "..OO.", "....."]),
    Template::from_ascii([".....", ".....", ".OOO.", ".O...", "....."]),
    Template::from_ascii([".....", ".OO..", "..O..", "..O..", "....."]),
];

const T_TEMPLATES: [Template; 4] = [
    Template::from_ascii([".....", "..O..", ".OOO.", ".....", "....."]),
    Template::from_ascii([".....", "..O..", "..OO.", "..O..", "....."]),
    Template::from_ascii([".....", ".....", ".OOO.", "..O..", "....."]),
    Template::from_ascii([".....", "..O..", ".OO..", "..O..", "....."]),
];

/// Templates for every kind, indexed by [`PieceKind::index`].
const CATALOG: [&[Template]; 7] = [
    &S_TEMPLATES,
    &Z_TEMPLATES,
    &I_TEMPLATES,
    &O_TEMPLATES,
    &J_TEMPLATES,
    &L_TEMPLATES,
    &T_TEMPLATES,
];

const fn build_column_offsets() -> [[i8; MAX_ROTATIONS]; 7] {
    let mut table = [[0i8; MAX_ROTATIONS]; 7];
    let mut k = 0;
    while k < CATALOG.len() {
        let templates = CATALOG[k];
        let mut r = 0;
        while r < templates.len() {
            table[k][r] = templates[r].leftmost_column();
            r += 1;
        }
        k += 1;
    }
    table
}

/// Leftmost occupied template column per (kind, rotation).
///
/// Aligns a requested board column with a rotation's footprint.
static COLUMN_OFFSETS: [[i8; MAX_ROTATIONS]; 7] = build_column_offsets();

/// Ordered rotation templates for a kind.
pub fn templates(kind: PieceKind) -> &'static [Template] {
    CATALOG[kind.index()]
}

/// Number of rotation states for a kind.
pub fn rotation_count(kind: PieceKind) -> u8 {
    templates(kind).len() as u8
}

/// Template for a kind at a rotation index (taken modulo the rotation count).
pub fn template(kind: PieceKind, rotation: u8) -> &'static Template {
    let list = templates(kind);
    &list[rotation as usize % list.len()]
}

/// Horizontal offset from a template's anchor to its leftmost occupied column.
pub fn column_offset(kind: PieceKind, rotation: u8) -> i8 {
    let r = rotation % rotation_count(kind);
    COLUMN_OFFSETS[kind.index()][r as usize]
}

/// A piece in play: kind, rotation index, and anchor position.
///
/// The anchor is the board coordinate of the template's top-left corner; `y`
/// may be negative while the piece is still partly above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece, normalising the rotation index.
    pub fn new(kind: PieceKind, rotation: u8, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: rotation % rotation_count(kind),
            x,
            y,
        }
    }

    /// Create a piece at the spawn anchor.
    pub fn spawn(kind: PieceKind, rotation: u8) -> Self {
        Self::new(kind, rotation, SPAWN_X, SPAWN_Y)
    }

    /// Same piece with a different (normalised) rotation.
    pub fn with_rotation(self, rotation: u8) -> Self {
        Self::new(self.kind, rotation, self.x, self.y)
    }

    /// Same piece moved by (dx, dy).
    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    pub fn template(&self) -> &'static Template {
        template(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.template()
            .cells()
            .map(move |(tx, ty)| (self.x + tx, self.y + ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            for t in templates(kind) {
                assert_eq!(t.cells().count(), 4, "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_rotation_counts() {
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::I), 2);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
        assert_eq!(rotation_count(PieceKind::T), 4);
    }

    #[test]
    fn test_column_offsets_match_footprints() {
        assert_eq!(column_offset(PieceKind::S, 0), 1);
        assert_eq!(column_offset(PieceKind::S, 1), 2);
        assert_eq!(column_offset(PieceKind::Z, 0), 1);
        assert_eq!(column_offset(PieceKind::Z, 1), 1);
        assert_eq!(column_offset(PieceKind::I, 0), 2);
        assert_eq!(column_offset(PieceKind::I, 1), 0);
        assert_eq!(column_offset(PieceKind::O, 0), 1);
        for kind in [PieceKind::J, PieceKind::L, PieceKind::T] {
            assert_eq!(column_offset(kind, 0), 1);
            assert_eq!(column_offset(kind, 1), 2);
            assert_eq!(column_offset(kind, 2), 1);
            assert_eq!(column_offset(kind, 3), 1);
        }
    }

    #[test]
    fn test_rotation_wraps_modulo_count() {
        let piece = Piece::new(PieceKind::S, 3, 0, 0);
        assert_eq!(piece.rotation, 1);
        assert_eq!(Piece::spawn(PieceKind::O, 2).rotation, 0);
        assert_eq!(column_offset(PieceKind::I, 2), column_offset(PieceKind::I, 0));
    }

    #[test]
    fn test_cells_are_offset_by_anchor() {
        let piece = Piece::new(PieceKind::O, 0, 4, 10);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(5, 12), (6, 12), (5, 13), (6, 13)]);
    }
}
