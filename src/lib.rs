//! Tetromino (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and hosts the pieces the
//! `tetromino` binary needs: run configuration and the placement journal.

pub mod config;
pub mod journal;

pub use tetromino_ai as ai;
pub use tetromino_core as core;
pub use tetromino_engine as engine;
pub use tetromino_types as types;
