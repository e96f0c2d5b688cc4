use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    engine::{
        call::ScoreCall,
        resolver::active_server_id,
        rules::{initialize, resolve_rally},
        traits::RallyOutcome,
        win::{ConfigError, WinCondition},
    },
    state::MatchState,
    types::{MatchMode, PlayerId, ScoringType, Side},
};

use super::history::HistoryStack;

/// Version number for serialized [`GameSnapshotV1`] payloads.
pub const SNAPSHOT_FORMAT_VERSION: u16 = 1;

/// Rejected game operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A rally was reported after the game was already won.
    #[error("game already won by {winner:?}")]
    MatchDecided {
        /// Side that won.
        winner: Side,
    },
    /// Snapshot history does not belong to the snapshot's game.
    #[error("snapshot history entry {index} is {found:?}, expected {expected:?}")]
    SnapshotMismatch {
        /// Offending history position.
        index: usize,
        /// Mode and scoring type of the entry.
        found: (MatchMode, ScoringType),
        /// Mode and scoring type of the current state.
        expected: (MatchMode, ScoringType),
    },
    /// Snapshot was written by an unknown format version.
    #[error("snapshot version mismatch: found {found}, expected {expected}")]
    VersionMismatch {
        /// Version in the payload.
        found: u16,
        /// Version this crate writes.
        expected: u16,
    },
    /// Snapshot carries a win condition that can never be played.
    #[error("invalid win condition {0:?}")]
    InvalidWinCondition(WinCondition),
    /// Recorded winner disagrees with the recorded scores.
    #[error("recorded winner {recorded:?} does not match scores, expected {expected:?}")]
    WinnerMismatch {
        /// Winner stored in the snapshot.
        recorded: Option<Side>,
        /// Winner the scores imply.
        expected: Option<Side>,
    },
    /// Service turn anchor is above the serving team's score.
    #[error("service turn started at {anchor} but serving team has {score}")]
    AnchorAhead {
        /// Stored turn start score.
        anchor: u32,
        /// Serving team's score.
        score: u32,
    },
}

/// Whole game handed to or from a view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshotV1 {
    /// Payload format version.
    pub format_version: u16,
    /// Current state.
    pub state: MatchState,
    /// Prior states, oldest first.
    pub history: Vec<MatchState>,
    /// Win condition in force.
    pub win: WinCondition,
}

/// One game: current state plus the undo stack.
#[derive(Debug, Clone)]
pub struct Game {
    current: MatchState,
    history: HistoryStack,
    win: WinCondition,
}

impl Game {
    /// Fresh 0-0 game with the standard win condition.
    pub fn new(mode: MatchMode, scoring_type: ScoringType) -> Self {
        Self::fresh(mode, scoring_type, WinCondition::default())
    }

    /// Fresh 0-0 game with a custom win condition.
    pub fn with_condition(
        mode: MatchMode,
        scoring_type: ScoringType,
        win: WinCondition,
    ) -> Result<Self, ConfigError> {
        win.validate()?;
        Ok(Self::fresh(mode, scoring_type, win))
    }

    fn fresh(mode: MatchMode, scoring_type: ScoringType, win: WinCondition) -> Self {
        Self {
            current: initialize(mode, scoring_type),
            history: HistoryStack::new(),
            win,
        }
    }

    /// Rebuilds a game by applying `winners` in order.
    pub fn replay(
        mode: MatchMode,
        scoring_type: ScoringType,
        winners: impl IntoIterator<Item = Side>,
    ) -> Result<Self, GameError> {
        let mut game = Self::new(mode, scoring_type);
        for winner in winners {
            game.rally(winner)?;
        }
        Ok(game)
    }

    /// Restores a game exported with [`Game::export_snapshot`].
    ///
    /// Every state in the snapshot must agree with its own scores under the
    /// snapshot's win condition.
    pub fn from_snapshot(snapshot: GameSnapshotV1) -> Result<Self, GameError> {
        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(GameError::VersionMismatch {
                found: snapshot.format_version,
                expected: SNAPSHOT_FORMAT_VERSION,
            });
        }
        if snapshot.win.validate().is_err() {
            return Err(GameError::InvalidWinCondition(snapshot.win));
        }

        let expected = (snapshot.state.mode, snapshot.state.scoring_type);
        for (index, entry) in snapshot.history.iter().enumerate() {
            let found = (entry.mode, entry.scoring_type);
            if found != expected {
                return Err(GameError::SnapshotMismatch {
                    index,
                    found,
                    expected,
                });
            }
        }

        for state in snapshot.history.iter().chain(std::iter::once(&snapshot.state)) {
            check_consistent(state, &snapshot.win)?;
        }

        Ok(Self {
            current: snapshot.state,
            history: HistoryStack::from_vec(snapshot.history),
            win: snapshot.win,
        })
    }

    /// Copies the whole game out.
    pub fn export_snapshot(&self) -> GameSnapshotV1 {
        GameSnapshotV1 {
            format_version: SNAPSHOT_FORMAT_VERSION,
            state: self.current,
            history: self.history.iter().copied().collect(),
            win: self.win,
        }
    }

    /// Current state.
    pub fn state(&self) -> &MatchState {
        &self.current
    }

    /// Undo stack.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Win condition in force.
    pub fn win_condition(&self) -> WinCondition {
        self.win
    }

    /// Records a rally won by `winner`.
    ///
    /// Rejected once the game is won; a rejected call leaves the undo
    /// stack untouched.
    pub fn rally(&mut self, winner: Side) -> Result<RallyOutcome, GameError> {
        if let Some(decided) = self.current.winner {
            warn!(?winner, ?decided, "rally reported after game was won");
            return Err(GameError::MatchDecided { winner: decided });
        }

        let (next, outcome) = resolve_rally(&self.current, winner, &self.win);
        self.history.push(self.current);
        self.current = next;

        debug!(
            ?winner,
            my_score = next.my_score,
            opponent_score = next.opponent_score,
            server = ?next.server,
            server_number = next.server_number.as_u8(),
            ?outcome,
            "rally applied"
        );
        if let Some(side) = outcome.decided {
            info!(
                winner = ?side,
                my_score = next.my_score,
                opponent_score = next.opponent_score,
                "game won"
            );
        }

        Ok(outcome)
    }

    /// Steps back one rally. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.history.pop() else {
            return false;
        };
        self.current = prev;
        debug!(
            my_score = prev.my_score,
            opponent_score = prev.opponent_score,
            depth = self.history.len(),
            "undo applied"
        );
        true
    }

    /// True when [`Game::undo`] would change the state.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Starts over at 0-0 with the same mode, scoring type and win condition.
    pub fn reset(&mut self) {
        let (mode, scoring_type) = (self.current.mode, self.current.scoring_type);
        self.current = initialize(mode, scoring_type);
        self.history.clear();
        info!(?mode, ?scoring_type, "game reset");
    }

    /// Player holding serve in doubles.
    pub fn active_server_id(&self) -> Option<PlayerId> {
        active_server_id(&self.current)
    }

    /// Score call for the next serve.
    pub fn call(&self) -> ScoreCall {
        ScoreCall::for_state(&self.current)
    }
}

fn check_consistent(state: &MatchState, win: &WinCondition) -> Result<(), GameError> {
    let expected = win.evaluate(state.my_score, state.opponent_score);
    if state.winner != expected {
        return Err(GameError::WinnerMismatch {
            recorded: state.winner,
            expected,
        });
    }

    let score = state.score(state.server);
    if state.serving_team_start_score > score {
        return Err(GameError::AnchorAhead {
            anchor: state.serving_team_start_score,
            score,
        });
    }
    Ok(())
}
