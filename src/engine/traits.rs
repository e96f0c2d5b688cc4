use serde::{Deserialize, Serialize};

use crate::{state::MatchState, types::Side};

/// What happened to the serve after a rally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceChange {
    /// The same server keeps serving.
    Retained,
    /// Serve passed to the partner of the serving doubles team.
    SecondServer,
    /// Serve passed across the net.
    SideOut {
        /// Side now serving.
        new_server: Side,
    },
}

/// Effect of one rally on the score and the serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RallyOutcome {
    /// Side awarded a point, if any.
    pub scored: Option<Side>,
    /// Serve transition.
    pub service: ServiceChange,
    /// Winner decided by this rally.
    pub decided: Option<Side>,
}

impl RallyOutcome {
    /// Outcome of a rally applied to an already decided game.
    pub fn ignored() -> Self {
        Self {
            scored: None,
            service: ServiceChange::Retained,
            decided: None,
        }
    }
}

/// Scoring rule for one `(mode, scoring type)` pair.
///
/// Implementations edit a freshly copied state; the caller owns the
/// snapshot of the state as it was before the rally.
pub trait ScoringRule: Send + Sync + 'static {
    /// Applies a rally won by `winner`, returning the points and serve effect.
    fn apply(&self, state: &mut MatchState, winner: Side) -> (Option<Side>, ServiceChange);
}
