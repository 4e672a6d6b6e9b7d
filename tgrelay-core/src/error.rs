//! Error types for the relay core.
//!
//! [`RelayError`] is the top-level error; [`PluginError`] is what plugins return, including the
//! [`PluginError::NotMatched`] sentinel used to continue the plugin chain.

use thiserror::Error;

/// Top-level error for tgrelay (bot transport, plugin, webhook registration, listen, config, IO).
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Plugin error: {0}")]
    Plugin(#[from] PluginError),

    #[error("Webhook registration error: {0}")]
    Registration(String),

    #[error("Listen error: {0}")]
    Listen(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by plugins. `NotMatched` is control flow, not a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    #[error("plugin: message not matched")]
    NotMatched,

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Plugin failed: {0}")]
    Failed(String),
}

impl PluginError {
    /// True for the chain-continuation sentinel.
    pub fn is_not_matched(&self) -> bool {
        matches!(self, PluginError::NotMatched)
    }
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
