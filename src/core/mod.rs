//! Game ownership and undo history.

/// Game wrapper owning state, history and win condition.
pub mod game;
/// Snapshot stack backing undo.
pub mod history;
