//! # tgrelay-cli
//!
//! Argument parsing, config loading, and the default plugin set for the `tgrelay` binary.

pub mod cli;

use std::sync::Arc;

use plugin_chain::{InlineMode, PluginChain};
use tgrelay_plugins::{ClockPlugin, EchoInlineProducer, EchoPlugin, LoggingChosenHandler, PingPlugin};

pub use cli::{load_config, Cli, Commands, ConfigArgs};
pub use tgrelay_telegram::RelayConfig;

/// Plugins served by `tgrelay run`, in precedence order (later wins).
pub fn default_chain() -> PluginChain {
    PluginChain::new()
        .add_plugin(Arc::new(PingPlugin))
        .add_plugin(Arc::new(EchoPlugin))
        .add_plugin(Arc::new(ClockPlugin::new()))
}

/// Inline mode served by `tgrelay run` unless `--no-inline` is given.
pub fn default_inline_mode() -> InlineMode {
    InlineMode::new(Arc::new(EchoInlineProducer))
        .with_chosen_handler(Arc::new(LoggingChosenHandler))
}
