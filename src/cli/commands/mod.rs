//! Subcommand implementations.

/// Interactive session command handler (the default command).
pub mod ask;

/// Configure command handler.
pub mod configure;
