//! Session - the live game the search plays against.
//!
//! Owns the canonical board, the piece queue and the falling piece. The
//! search only ever sees snapshots; this is the one place where a placement
//! is written to the live board and completed lines are cleared.

use crate::ai::{drop_distance, evaluate, is_legal, Move, Penalty};
use crate::core::{column_offset, Board, Piece, PieceQueue};
use crate::types::PieceKind;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// What happened when one piece was committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Resting position of the committed piece
    pub piece: Piece,
    /// Column/rotation the piece was dropped at
    pub mv: Move,
    /// Heuristic score of the board right after placement, before clearing
    pub penalty: Penalty,
    pub lines_cleared: u32,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    queue: PieceQueue,
    active: Option<Piece>,
    seed: u32,
    started: bool,
    game_over: bool,
    lines: u32,
    pieces_placed: u32,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            queue: PieceQueue::new(seed),
            active: None,
            seed,
            started: false,
            game_over: false,
            lines: 0,
            pieces_placed: 0,
        }
    }

    /// Reset everything and spawn the first piece
    pub fn start(&mut self) {
        *self = Self::new(self.seed);
        self.started = true;
        self.spawn_piece();
    }

    /// Draw the next kind and put it at the spawn anchor.
    ///
    /// Returns false (and ends the game) if the spawned piece does not fit.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.queue.draw();
        let rotation = self.queue.spawn_rotation(kind);
        let piece = Piece::spawn(kind, rotation);

        if !is_legal(&self.board, &piece, 0, 0) {
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Drop the falling piece straight down from where it is and commit it.
    pub fn hard_drop(&mut self) -> Option<StepReport> {
        if !self.playable() {
            return None;
        }
        let active = self.active?;

        let piece = active.shifted(0, drop_distance(&self.board, &active));
        let mut board = self.board.clone();
        board.place(&piece);

        let mv = Move {
            column: (piece.x + column_offset(piece.kind, piece.rotation)) as u8,
            rotation: piece.rotation,
        };
        Some(self.commit(piece, board, mv))
    }

    /// Adopt a board with `piece` already written in, clear lines, and spawn
    /// the next piece.
    pub(crate) fn commit(&mut self, piece: Piece, mut board: Board, mv: Move) -> StepReport {
        let penalty = evaluate(&board);
        let lines_cleared = board.clear_completed_lines();

        self.board = board;
        self.lines += lines_cleared;
        self.pieces_placed += 1;
        self.active = None;
        self.spawn_piece();

        StepReport {
            piece,
            mv,
            penalty,
            lines_cleared,
        }
    }

    /// Stop the game; nothing more can be placed.
    pub fn end(&mut self) {
        self.game_over = true;
        self.active = None;
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Upcoming kinds after the falling piece
    pub fn preview(&self) -> &[PieceKind] {
        self.queue.preview()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.lines / LINES_PER_LEVEL + 1
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}
