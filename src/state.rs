//! Match state record and per-side lineup.

use serde::{Deserialize, Serialize};

use crate::types::{CourtSide, MatchMode, PlayerId, ScoringType, ServerNumber, Side};

/// A side's two players by service court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lineup {
    /// Player standing in the right (even) court.
    pub right: PlayerId,
    /// Player standing in the left (odd) court.
    pub left: PlayerId,
}

impl Lineup {
    /// Builds a lineup from `[right, left]`.
    pub const fn new(right: PlayerId, left: PlayerId) -> Self {
        Self { right, left }
    }

    /// Returns the lineup with both players switched.
    pub fn swapped(self) -> Self {
        Self {
            right: self.left,
            left: self.right,
        }
    }

    /// Player in the given court half.
    pub fn at(&self, court: CourtSide) -> PlayerId {
        match court {
            CourtSide::Right => self.right,
            CourtSide::Left => self.left,
        }
    }

    /// True when `id` plays in this lineup.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.right == id || self.left == id
    }
}

/// Complete scoring state of one game.
///
/// Values are replaced, never edited by callers: every transition builds a
/// new `MatchState`. Undo history is kept outside, see
/// [`crate::core::history::HistoryStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchState {
    /// Singles or doubles.
    pub mode: MatchMode,
    /// Rally or side-out scoring.
    pub scoring_type: ScoringType,
    /// Points for [`Side::Me`].
    pub my_score: u32,
    /// Points for [`Side::Opponent`].
    pub opponent_score: u32,
    /// Side currently serving.
    pub server: Side,
    /// Sub-server of the serving doubles team. Always `First` outside doubles side-out.
    pub server_number: ServerNumber,
    /// My players by court.
    pub my_players: Lineup,
    /// Opponent players by court.
    pub opponent_players: Lineup,
    /// Singles display court for my player.
    pub my_court_side: CourtSide,
    /// Singles display court for the opponent.
    pub opponent_court_side: CourtSide,
    /// Armed during the opening service turn of a doubles side-out game.
    pub first_server_exception: bool,
    /// Serving team's score when its current service turn began.
    pub serving_team_start_score: u32,
    /// Set once a side has clinched the game.
    pub winner: Option<Side>,
}

impl MatchState {
    /// Score of `side`.
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Me => self.my_score,
            Side::Opponent => self.opponent_score,
        }
    }

    /// Lineup of `side`.
    pub fn players(&self, side: Side) -> Lineup {
        match side {
            Side::Me => self.my_players,
            Side::Opponent => self.opponent_players,
        }
    }

    /// True once a winner has been decided.
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    pub(crate) fn award_point(&mut self, side: Side) {
        match side {
            Side::Me => self.my_score += 1,
            Side::Opponent => self.opponent_score += 1,
        }
    }

    pub(crate) fn swap_players(&mut self, side: Side) {
        match side {
            Side::Me => self.my_players = self.my_players.swapped(),
            Side::Opponent => self.opponent_players = self.opponent_players.swapped(),
        }
    }

    pub(crate) fn refresh_court_sides(&mut self) {
        self.my_court_side = CourtSide::for_score(self.my_score);
        self.opponent_court_side = CourtSide::for_score(self.opponent_score);
    }
}
