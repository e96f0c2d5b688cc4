//! Runtime event stream payloads.

use serde::{Deserialize, Serialize};

use crate::{engine::traits::RallyOutcome, state::MatchState, types::Side};

/// Events emitted from the single-writer match loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A rally was applied.
    RallyApplied {
        /// Side that won the rally.
        winner: Side,
        /// What the rally did.
        outcome: RallyOutcome,
        /// State after the rally.
        state: MatchState,
    },
    /// The game was won.
    MatchWon {
        /// Winning side.
        winner: Side,
    },
    /// One undo step was applied.
    UndoApplied {
        /// State after the undo.
        state: MatchState,
    },
    /// The game restarted at 0-0.
    Reset,
}
