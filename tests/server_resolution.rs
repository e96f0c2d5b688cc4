use pickle_score::{
    core::game::Game,
    engine::{
        call::ScoreCall,
        resolver::active_server_id,
        rules::{apply_rally_result, initialize},
    },
    state::MatchState,
    types::{MatchMode, PlayerId, ScoringType, ServerNumber, Side},
};

fn play(mode: MatchMode, scoring: ScoringType, winners: &[Side]) -> MatchState {
    winners
        .iter()
        .fold(initialize(mode, scoring), |s, w| apply_rally_result(&s, *w))
}

#[test]
fn singles_has_no_active_server_id() {
    for scoring in [ScoringType::Rally, ScoringType::SideOut] {
        let s = play(MatchMode::Singles, scoring, &[Side::Me, Side::Opponent]);
        assert_eq!(active_server_id(&s), None);
    }
}

#[test]
fn rally_doubles_uses_absolute_parity() {
    let s = initialize(MatchMode::Doubles, ScoringType::Rally);
    assert_eq!(active_server_id(&s), Some(PlayerId::A));

    let odd = MatchState { my_score: 3, ..s };
    assert_eq!(active_server_id(&odd), Some(odd.my_players.left));

    let even = MatchState { my_score: 4, ..s };
    assert_eq!(active_server_id(&even), Some(even.my_players.right));
}

#[test]
fn rally_doubles_server_follows_the_swap() {
    let s = play(MatchMode::Doubles, ScoringType::Rally, &[Side::Me, Side::Me]);
    assert_eq!(s.my_score, 2);
    assert_eq!(active_server_id(&s), Some(PlayerId::A));

    let s = play(MatchMode::Doubles, ScoringType::Rally, &[Side::Opponent]);
    assert_eq!(s.opponent_score, 1);
    assert_eq!(active_server_id(&s), Some(PlayerId::D));
}

#[test]
fn side_out_opening_server_is_exempt_from_inversion() {
    let s = initialize(MatchMode::Doubles, ScoringType::SideOut);
    assert_eq!(s.server_number, ServerNumber::Second);
    assert_eq!(active_server_id(&s), Some(PlayerId::A));

    let s = apply_rally_result(&s, Side::Me);
    assert_eq!(active_server_id(&s), Some(PlayerId::A));
}

#[test]
fn side_out_two_server_sequence_highlights_each_server() {
    let s = play(MatchMode::Doubles, ScoringType::SideOut, &[Side::Opponent]);
    assert_eq!(active_server_id(&s), Some(PlayerId::C));

    let s = apply_rally_result(&s, Side::Opponent);
    assert_eq!(active_server_id(&s), Some(PlayerId::C));

    let s = apply_rally_result(&s, Side::Me);
    assert_eq!(s.server_number, ServerNumber::Second);
    assert_eq!(active_server_id(&s), Some(PlayerId::D));

    let s = apply_rally_result(&s, Side::Opponent);
    assert_eq!(s.opponent_score, 2);
    assert_eq!(active_server_id(&s), Some(PlayerId::D));

    let s = apply_rally_result(&s, Side::Me);
    assert_eq!(s.server, Side::Me);
    assert_eq!(active_server_id(&s), Some(PlayerId::A));
}

#[test]
fn side_out_parity_is_relative_to_turn_start() {
    let s = play(
        MatchMode::Doubles,
        ScoringType::SideOut,
        &[Side::Me, Side::Opponent, Side::Opponent, Side::Me, Side::Me],
    );
    assert_eq!(s.server, Side::Me);
    assert_eq!(s.my_score, 1);
    assert_eq!(s.serving_team_start_score, 1);
    assert_eq!(active_server_id(&s), Some(s.my_players.right));
}

#[test]
fn active_server_id_is_stable_across_calls() {
    let s = play(
        MatchMode::Doubles,
        ScoringType::SideOut,
        &[Side::Opponent, Side::Opponent, Side::Me],
    );
    let first = active_server_id(&s);
    for _ in 0..5 {
        assert_eq!(active_server_id(&s), first);
    }
}

#[test]
fn score_call_leads_with_server() {
    let s = play(MatchMode::Singles, ScoringType::Rally, &[Side::Me, Side::Me, Side::Opponent]);
    assert_eq!(ScoreCall::for_state(&s).to_string(), "1 - 2");

    let mut game = Game::new(MatchMode::Doubles, ScoringType::SideOut);
    assert_eq!(game.call().to_string(), "0 - 0 - 2");
    game.rally(Side::Opponent).expect("rally");
    assert_eq!(game.call().to_string(), "0 - 0 - 1");
    game.rally(Side::Opponent).expect("rally");
    assert_eq!(game.call().to_string(), "1 - 0 - 1");

    let rally = Game::new(MatchMode::Doubles, ScoringType::Rally);
    assert_eq!(rally.call().server_number, None);
}
