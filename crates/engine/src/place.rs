use std::fmt;

use crate::ai::{best_move, drop_to, Move};
use crate::session::{Session, StepReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotPlayable,
    NoActive,
    IllegalPlacement,
    NoLegalMove,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable | PlaceError::NoActive => "not_playable",
            PlaceError::IllegalPlacement => "illegal_placement",
            PlaceError::NoLegalMove => "no_legal_move",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "game is not playable",
            PlaceError::NoActive => "no active piece",
            PlaceError::IllegalPlacement => "target column and rotation do not fit",
            PlaceError::NoLegalMove => "no candidate placement fits the falling piece",
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Drop the falling piece at `mv` and commit it to the live board.
///
/// The live board is only touched once the simulated placement has landed.
pub fn apply_place(state: &mut Session, mv: Move) -> Result<StepReport, PlaceError> {
    if !state.playable() {
        return Err(PlaceError::NotPlayable);
    }
    let Some(active) = state.active() else {
        return Err(PlaceError::NoActive);
    };

    let landing = drop_to(state.board(), &active, mv.column, mv.rotation);
    if !landing.landed {
        return Err(PlaceError::IllegalPlacement);
    }

    Ok(state.commit(landing.piece, landing.board, mv))
}

/// Let the search choose where the falling piece goes, then place it.
///
/// When nothing fits the session ends: the piece cannot be placed.
pub fn autoplay_step(state: &mut Session) -> Result<StepReport, PlaceError> {
    if !state.playable() {
        return Err(PlaceError::NotPlayable);
    }
    let Some(active) = state.active() else {
        return Err(PlaceError::NoActive);
    };

    let Some(mv) = best_move(state.board(), &active) else {
        state.end();
        return Err(PlaceError::NoLegalMove);
    };

    apply_place(state, mv)
}
