//! Interactive question/answer session.
//!
//! A REPL-style loop driven by an explicit state machine: prompt for a
//! question, fetch the answer, offer translation, repeat.

/// Session states and pure input classification.
pub mod state;
mod runner;
mod ui;

pub use runner::Session;
