use serde::{Deserialize, Serialize};

use crate::state::MatchState;

/// Stack of prior states for one-step undo.
///
/// Entries are plain [`MatchState`] values, so nothing nests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vec<MatchState>,
}

impl HistoryStack {
    /// Empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a state before it is replaced.
    pub fn push(&mut self, state: MatchState) {
        self.entries.push(state);
    }

    /// Removes and returns the most recent state.
    pub fn pop(&mut self) -> Option<MatchState> {
        self.entries.pop()
    }

    /// Number of recorded states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MatchState> {
        self.entries.iter()
    }

    pub(crate) fn from_vec(entries: Vec<MatchState>) -> Self {
        Self { entries }
    }
}
