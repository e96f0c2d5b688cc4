//! Deterministic pickleball scoring: rally and side-out rules for singles
//! and doubles, win detection, doubles server resolution and undo.
//!
//! # Examples
//!
//! Pure transitions with [`engine::rules`]:
//! ```
//! use pickle_score::{
//!     engine::{resolver::active_server_id, rules::{apply_rally_result, initialize}},
//!     types::{MatchMode, PlayerId, ScoringType, Side},
//! };
//!
//! let start = initialize(MatchMode::Doubles, ScoringType::Rally);
//! let next = apply_rally_result(&start, Side::Me);
//! assert_eq!(next.my_score, 1);
//! assert_eq!(active_server_id(&next), Some(PlayerId::A));
//! ```
//!
//! A game with undo via [`core::game::Game`]:
//! ```
//! use pickle_score::{
//!     core::game::Game,
//!     types::{MatchMode, ScoringType, Side},
//! };
//!
//! let mut game = Game::new(MatchMode::Doubles, ScoringType::SideOut);
//! game.rally(Side::Me).expect("rally");
//! assert_eq!(game.call().to_string(), "1 - 0 - 2");
//! assert!(game.undo());
//! assert_eq!(game.state().my_score, 0);
//! ```
//!
//! Match loop usage:
//! ```no_run
//! use pickle_score::{
//!     runtime::handle::{spawn_match, RuntimeConfig},
//!     types::{MatchMode, ScoringType, Side},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handle = spawn_match(MatchMode::Singles, ScoringType::Rally, RuntimeConfig::default())
//!     .expect("default config");
//! handle.rally(Side::Opponent).await.expect("rally");
//! let view = handle.view().await.expect("view");
//! assert_eq!(view.call.to_string(), "1 - 0");
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Game ownership and undo history.
pub mod core;
/// Scoring rules, win detection and server resolution.
pub mod engine;
/// Single-writer match loop and events.
pub mod runtime;
/// Match state records.
pub mod state;
/// Shared primitive types and constants.
pub mod types;
