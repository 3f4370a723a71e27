//! # qna - Interactive Q&A CLI
//!
//! `qna` is a command-line tool for asking questions against a hosted
//! question answering service, with optional on-demand translation of the
//! returned answers.
//!
//! ## Features
//!
//! - **Interactive sessions**: REPL-style question/answer loop
//! - **Answer translation**: translate any answer to French, Spanish or Italian
//! - **Guided setup**: configure endpoints and keys with `qna configure`
//!
//! ## Quick Start
//!
//! ```bash
//! # Set up service endpoints and keys
//! qna configure
//!
//! # Start an interactive session
//! qna
//!
//! # List supported translation targets
//! qna languages
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/qna/config.toml`:
//!
//! ```toml
//! [qna]
//! endpoint = "https://my-resource.cognitiveservices.azure.com/language/:query-knowledgebases?projectName=faq&api-version=2021-10-01&deploymentName=production"
//! api_key_env = "QNA_API_KEY"
//!
//! [translator]
//! endpoint = "https://api.cognitive.microsofttranslator.com/translate?api-version=3.0"
//! api_key_env = "TRANSLATOR_API_KEY"
//! region = "westeurope"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// XDG-style path utilities for the configuration directory.
pub mod paths;

/// Question answering client.
pub mod qna;

/// Interactive question/answer session.
pub mod session;

/// Translation client and target languages.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
