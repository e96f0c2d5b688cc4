use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Side, WIN_BY, WIN_SCORE};

/// Invalid win configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Win score must be at least one point.
    #[error("win score must be at least 1, got {0}")]
    InvalidWinScore(u32),
    /// Win margin must be at least one point.
    #[error("win-by margin must be at least 1, got {0}")]
    InvalidWinBy(u32),
    /// Config text could not be parsed.
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Target score and required margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WinCondition {
    /// Minimum points to win.
    pub win_score: u32,
    /// Required lead over the other side.
    pub win_by: u32,
}

impl Default for WinCondition {
    fn default() -> Self {
        Self {
            win_score: WIN_SCORE,
            win_by: WIN_BY,
        }
    }
}

impl WinCondition {
    /// Rejects a zero target or margin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_score == 0 {
            return Err(ConfigError::InvalidWinScore(self.win_score));
        }
        if self.win_by == 0 {
            return Err(ConfigError::InvalidWinBy(self.win_by));
        }
        Ok(())
    }

    /// Returns the side that has clinched, if any.
    pub fn evaluate(&self, my_score: u32, opponent_score: u32) -> Option<Side> {
        if self.clinched(my_score, opponent_score) {
            Some(Side::Me)
        } else if self.clinched(opponent_score, my_score) {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    fn clinched(&self, score: u32, other: u32) -> bool {
        score >= self.win_score && score >= other.saturating_add(self.win_by)
    }
}

/// [`WinCondition::evaluate`] with the standard 11, win by 2.
pub fn evaluate(my_score: u32, opponent_score: u32) -> Option<Side> {
    WinCondition::default().evaluate(my_score, opponent_score)
}
