//! Shared primitive enums and scoring constants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Points needed before a side can win a game.
pub const WIN_SCORE: u32 = 11;
/// Lead required over the other side to close out a game.
pub const WIN_BY: u32 = 2;

/// One of the two sides of the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The scorekeeper's side.
    Me,
    /// The other side.
    Opponent,
}

impl Side {
    /// Returns the side across the net.
    pub fn other(self) -> Self {
        match self {
            Self::Me => Self::Opponent,
            Self::Opponent => Self::Me,
        }
    }
}

/// Number of players per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    /// One player per side.
    Singles,
    /// Two players per side.
    Doubles,
}

/// Scoring regime for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringType {
    /// Every rally scores a point.
    Rally,
    /// Only the serving side can score.
    SideOut,
}

/// Service court half, seen from the player facing the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourtSide {
    /// Left (odd) court.
    Left,
    /// Right (even) court.
    Right,
}

impl CourtSide {
    /// Even scores serve from the right, odd scores from the left.
    pub fn for_score(score: u32) -> Self {
        if score % 2 == 0 {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// Which teammate of the serving doubles team holds serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerNumber {
    /// First server of the service turn.
    First,
    /// Second server; losing the rally hands serve to the other side.
    Second,
}

impl ServerNumber {
    /// Numeric form used in score calls.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl fmt::Display for ServerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Fixed player identifier. `A`/`B` play for [`Side::Me`], `C`/`D` for [`Side::Opponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// First player on my side.
    A,
    /// Second player on my side.
    B,
    /// First opponent.
    C,
    /// Second opponent.
    D,
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(label)
    }
}
