use crate::{
    state::{Lineup, MatchState},
    types::{CourtSide, MatchMode, PlayerId, ScoringType, ServerNumber, Side},
};

use super::{
    traits::{RallyOutcome, ScoringRule, ServiceChange},
    win::WinCondition,
};

/// Singles, every rally scores.
#[derive(Debug, Default, Clone, Copy)]
pub struct SinglesRally;

/// Singles, only the server scores.
#[derive(Debug, Default, Clone, Copy)]
pub struct SinglesSideOut;

/// Doubles, every rally scores, one server per turn.
#[derive(Debug, Default, Clone, Copy)]
pub struct DoublesRally;

/// Doubles, only the server scores, two servers per turn.
#[derive(Debug, Default, Clone, Copy)]
pub struct DoublesSideOut;

impl ScoringRule for SinglesRally {
    fn apply(&self, state: &mut MatchState, winner: Side) -> (Option<Side>, ServiceChange) {
        state.award_point(winner);
        let service = if winner == state.server {
            ServiceChange::Retained
        } else {
            state.server = winner;
            ServiceChange::SideOut { new_server: winner }
        };
        state.refresh_court_sides();
        (Some(winner), service)
    }
}

impl ScoringRule for SinglesSideOut {
    fn apply(&self, state: &mut MatchState, winner: Side) -> (Option<Side>, ServiceChange) {
        let out = if winner == state.server {
            state.award_point(winner);
            (Some(winner), ServiceChange::Retained)
        } else {
            state.server = winner;
            (None, ServiceChange::SideOut { new_server: winner })
        };
        state.refresh_court_sides();
        out
    }
}

impl ScoringRule for DoublesRally {
    fn apply(&self, state: &mut MatchState, winner: Side) -> (Option<Side>, ServiceChange) {
        state.award_point(winner);
        let service = if winner == state.server {
            state.swap_players(winner);
            ServiceChange::Retained
        } else {
            state.server = winner;
            ServiceChange::SideOut { new_server: winner }
        };
        state.server_number = ServerNumber::First;
        (Some(winner), service)
    }
}

impl ScoringRule for DoublesSideOut {
    fn apply(&self, state: &mut MatchState, winner: Side) -> (Option<Side>, ServiceChange) {
        if winner == state.server {
            state.award_point(winner);
            state.swap_players(winner);
            return (Some(winner), ServiceChange::Retained);
        }

        match state.server_number {
            ServerNumber::First => {
                state.server_number = ServerNumber::Second;
                (None, ServiceChange::SecondServer)
            }
            ServerNumber::Second => {
                state.server = winner;
                state.server_number = ServerNumber::First;
                state.first_server_exception = false;
                state.serving_team_start_score = state.score(winner);
                (None, ServiceChange::SideOut { new_server: winner })
            }
        }
    }
}

/// Returns the rule for a `(mode, scoring type)` pair.
pub fn rule_for(mode: MatchMode, scoring_type: ScoringType) -> &'static dyn ScoringRule {
    match (mode, scoring_type) {
        (MatchMode::Singles, ScoringType::Rally) => &SinglesRally,
        (MatchMode::Singles, ScoringType::SideOut) => &SinglesSideOut,
        (MatchMode::Doubles, ScoringType::Rally) => &DoublesRally,
        (MatchMode::Doubles, ScoringType::SideOut) => &DoublesSideOut,
    }
}

/// Builds the 0-0 state for a new game.
///
/// Doubles side-out opens at server number two with the first-server
/// exception armed, so the opening team gets a single server.
pub fn initialize(mode: MatchMode, scoring_type: ScoringType) -> MatchState {
    let two_server = mode == MatchMode::Doubles && scoring_type == ScoringType::SideOut;
    MatchState {
        mode,
        scoring_type,
        my_score: 0,
        opponent_score: 0,
        server: Side::Me,
        server_number: if two_server {
            ServerNumber::Second
        } else {
            ServerNumber::First
        },
        my_players: Lineup::new(PlayerId::A, PlayerId::B),
        opponent_players: Lineup::new(PlayerId::C, PlayerId::D),
        my_court_side: CourtSide::Right,
        opponent_court_side: CourtSide::Right,
        first_server_exception: two_server,
        serving_team_start_score: 0,
        winner: None,
    }
}

/// Applies one rally under the standard win condition.
pub fn apply_rally_result(state: &MatchState, winner: Side) -> MatchState {
    resolve_rally(state, winner, &WinCondition::default()).0
}

/// Applies one rally under a custom win condition.
pub fn apply_rally_result_with(
    state: &MatchState,
    winner: Side,
    win: &WinCondition,
) -> MatchState {
    resolve_rally(state, winner, win).0
}

/// Applies one rally and reports what it did.
///
/// A state that already has a winner comes back unchanged.
pub fn resolve_rally(
    state: &MatchState,
    winner: Side,
    win: &WinCondition,
) -> (MatchState, RallyOutcome) {
    let mut next = *state;
    if state.is_decided() {
        return (next, RallyOutcome::ignored());
    }

    let (scored, service) = rule_for(state.mode, state.scoring_type).apply(&mut next, winner);

    let decided = win.evaluate(next.my_score, next.opponent_score);
    next.winner = decided;

    (
        next,
        RallyOutcome {
            scored,
            service,
            decided,
        },
    )
}
