//! Single-writer async match loop and event stream APIs.

/// Event stream types emitted by the match loop.
pub mod events;
/// Handle and command loop implementation.
pub mod handle;
