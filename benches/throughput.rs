use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pickle_score::{
    core::game::Game,
    engine::{
        resolver::active_server_id,
        rules::{apply_rally_result, initialize},
        win::WinCondition,
    },
    types::{MatchMode, ScoringType, Side},
};

fn winner_at(i: u32) -> Side {
    if (i * 7 + 3) % 5 < 2 {
        Side::Me
    } else {
        Side::Opponent
    }
}

fn bench_pure_transitions(c: &mut Criterion) {
    c.bench_function("apply_rally_result_10k", |b| {
        b.iter(|| {
            let mut state = initialize(MatchMode::Doubles, ScoringType::SideOut);
            for i in 0..10_000u32 {
                if state.winner.is_some() {
                    state = initialize(MatchMode::Doubles, ScoringType::SideOut);
                }
                state = apply_rally_result(&state, winner_at(i));
                let _ = active_server_id(&state);
            }
        });
    });
}

fn bench_rally_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("rally_then_undo");
    let win = WinCondition {
        win_score: u32::MAX,
        win_by: 2,
    };

    for n in [100u32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut game = Game::with_condition(MatchMode::Doubles, ScoringType::Rally, win)
                    .expect("win condition");
                for i in 0..n {
                    let _ = game.rally(winner_at(i)).expect("rally");
                }
                while game.undo() {}
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pure_transitions, bench_rally_and_undo);
criterion_main!(benches);
