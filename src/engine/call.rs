use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    state::MatchState,
    types::{MatchMode, ScoringType, ServerNumber},
};

/// Score as announced before a serve: server's score first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreCall {
    /// Serving side's score.
    pub server_score: u32,
    /// Receiving side's score.
    pub receiver_score: u32,
    /// Present only for doubles side-out.
    pub server_number: Option<ServerNumber>,
}

impl ScoreCall {
    /// Builds the call for `state`.
    pub fn for_state(state: &MatchState) -> Self {
        let two_server =
            state.mode == MatchMode::Doubles && state.scoring_type == ScoringType::SideOut;
        Self {
            server_score: state.score(state.server),
            receiver_score: state.score(state.server.other()),
            server_number: two_server.then_some(state.server_number),
        }
    }
}

impl fmt::Display for ScoreCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.server_score, self.receiver_score)?;
        if let Some(n) = self.server_number {
            write!(f, " - {n}")?;
        }
        Ok(())
    }
}
