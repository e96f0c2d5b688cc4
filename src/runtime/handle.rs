use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::info;

use crate::{
    core::game::{Game, GameError, GameSnapshotV1},
    engine::{
        call::ScoreCall,
        traits::RallyOutcome,
        win::{ConfigError, WinCondition},
    },
    state::MatchState,
    types::{MatchMode, PlayerId, ScoringType, Side},
};

use super::events::MatchEvent;

/// Failure reported through a [`MatchHandle`].
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The game rejected the command.
    #[error(transparent)]
    Game(#[from] GameError),
    /// The match loop has stopped.
    #[error("match loop is gone")]
    ChannelClosed,
}

/// Match loop settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Pending command capacity.
    pub command_queue_bound: usize,
    /// Broadcast buffer per subscriber.
    pub event_capacity: usize,
    /// Win condition for games started by [`spawn_match`].
    pub win: WinCondition,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_queue_bound: 256,
            event_capacity: 1024,
            win: WinCondition::default(),
        }
    }
}

impl RuntimeConfig {
    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.win.validate()?;
        Ok(config)
    }
}

/// What a view layer needs to draw the current game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    /// Current state.
    pub state: MatchState,
    /// Doubles player holding serve.
    pub active_server: Option<PlayerId>,
    /// Score call for the next serve.
    pub call: ScoreCall,
    /// Whether undo is available.
    pub can_undo: bool,
}

impl MatchView {
    fn of(game: &Game) -> Self {
        Self {
            state: *game.state(),
            active_server: game.active_server_id(),
            call: game.call(),
            can_undo: game.can_undo(),
        }
    }
}

/// Cloneable handle to a running match loop.
pub struct MatchHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<MatchEvent>,
}

impl Clone for MatchHandle {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
            events_tx: self.events_tx.clone(),
        }
    }
}

enum Command {
    Rally {
        winner: Side,
        resp: oneshot::Sender<Result<RallyOutcome, RuntimeError>>,
    },
    Undo {
        resp: oneshot::Sender<bool>,
    },
    Reset {
        resp: oneshot::Sender<()>,
    },
    View {
        resp: oneshot::Sender<MatchView>,
    },
    Snapshot {
        resp: oneshot::Sender<GameSnapshotV1>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Starts a fresh game loop for `mode` and `scoring_type`.
///
/// Fails before spawning when `config.win` is not playable.
pub fn spawn_match(
    mode: MatchMode,
    scoring_type: ScoringType,
    config: RuntimeConfig,
) -> Result<MatchHandle, ConfigError> {
    let game = Game::with_condition(mode, scoring_type, config.win)?;
    Ok(spawn_game(game, config))
}

/// Starts a loop that owns `game`. Transitions apply in the order commands arrive.
pub fn spawn_game(game: Game, config: RuntimeConfig) -> MatchHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound.max(1));
    let (events_tx, _) = broadcast::channel::<MatchEvent>(config.event_capacity.max(1));

    let events_tx_loop = events_tx.clone();

    tokio::spawn(async move {
        let mut game = game;
        let state = game.state();
        info!(mode = ?state.mode, scoring_type = ?state.scoring_type, "match loop started");

        while let Some(cmd) = cmd_rx.recv().await {
            if handle_command(cmd, &mut game, &events_tx_loop) {
                break;
            }
        }

        info!("match loop stopped");
    });

    MatchHandle { cmd_tx, events_tx }
}

impl MatchHandle {
    /// Subscribes to [`MatchEvent`]s emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<MatchEvent> {
        self.events_tx.subscribe()
    }

    /// Reports a rally won by `winner`.
    pub async fn rally(&self, winner: Side) -> Result<RallyOutcome, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Rally { winner, resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Steps back one rally; `false` when there was nothing to undo.
    pub async fn undo(&self) -> Result<bool, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Undo { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Restarts the game at 0-0.
    pub async fn reset(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Reset { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Current state with derived display fields.
    pub async fn view(&self) -> Result<MatchView, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::View { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Copies the whole game out.
    pub async fn snapshot(&self) -> Result<GameSnapshotV1, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Snapshot { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Stops the loop.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Shutdown { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }
}

fn handle_command(
    cmd: Command,
    game: &mut Game,
    events_tx: &broadcast::Sender<MatchEvent>,
) -> bool {
    match cmd {
        Command::Rally { winner, resp } => {
            let res = game.rally(winner).map_err(RuntimeError::from);
            if let Ok(outcome) = &res {
                let _ = events_tx.send(MatchEvent::RallyApplied {
                    winner,
                    outcome: *outcome,
                    state: *game.state(),
                });
                if let Some(side) = outcome.decided {
                    let _ = events_tx.send(MatchEvent::MatchWon { winner: side });
                }
            }
            let _ = resp.send(res);
        }
        Command::Undo { resp } => {
            let undone = game.undo();
            if undone {
                let _ = events_tx.send(MatchEvent::UndoApplied {
                    state: *game.state(),
                });
            }
            let _ = resp.send(undone);
        }
        Command::Reset { resp } => {
            game.reset();
            let _ = events_tx.send(MatchEvent::Reset);
            let _ = resp.send(());
        }
        Command::View { resp } => {
            let _ = resp.send(MatchView::of(game));
        }
        Command::Snapshot { resp } => {
            let _ = resp.send(game.export_snapshot());
        }
        Command::Shutdown { resp } => {
            let _ = resp.send(());
            return true;
        }
    }

    false
}
