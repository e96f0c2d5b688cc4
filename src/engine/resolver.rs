use crate::{
    state::MatchState,
    types::{CourtSide, MatchMode, PlayerId, ScoringType, ServerNumber},
};

/// Player currently holding serve, or `None` in singles.
///
/// Rally scoring uses the serving team's absolute score parity. Side-out
/// scoring uses parity relative to the start of the service turn, with
/// server two taking the opposite court unless the first-server exception
/// is still armed.
pub fn active_server_id(state: &MatchState) -> Option<PlayerId> {
    if state.mode == MatchMode::Singles {
        return None;
    }

    let players = state.players(state.server);
    let score = state.score(state.server);

    let court = match state.scoring_type {
        ScoringType::Rally => CourtSide::for_score(score),
        ScoringType::SideOut => {
            let relative = score.saturating_sub(state.serving_team_start_score);
            let first = CourtSide::for_score(relative);
            match state.server_number {
                ServerNumber::Second if !state.first_server_exception => opposite(first),
                _ => first,
            }
        }
    };

    Some(players.at(court))
}

fn opposite(court: CourtSide) -> CourtSide {
    match court {
        CourtSide::Left => CourtSide::Right,
        CourtSide::Right => CourtSide::Left,
    }
}
