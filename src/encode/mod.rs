//! Frame sinks.
//!
//! Sinks consume rendered frames in presentation order and are fed by [`crate::Stage`].

/// PNG image sequence sink.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
