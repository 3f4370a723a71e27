//! Configuration file management and resolution.
//!
//! The config file holds the endpoints, API keys and region for the two
//! hosted services. It is loaded once at startup and resolved into an
//! immutable [`ResolvedConfig`] that gets passed explicitly to the clients.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, QnaSettings, ResolvedConfig, TranslatorSettings, resolve_config,
};
