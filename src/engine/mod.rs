//! Scoring rules, win detection and server resolution.

/// Score call formatting.
pub mod call;
/// Active server resolution for doubles.
pub mod resolver;
/// Rule implementations and transition functions.
pub mod rules;
/// Scoring rule trait and rally outcome model.
pub mod traits;
/// Win detection and win condition config.
pub mod win;
