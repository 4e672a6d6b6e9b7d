//! # Plugin chain
//!
//! Runs an ordered sequence of plugins for each text message and dispatches updates. Every plugin is
//! consulted; a `NotMatched` result passes to the next plugin, a hard error is logged and skipped, and the
//! last successful reply is the one that gets sent.

mod dispatch;

pub use dispatch::{dispatch, dispatch_inline, InlineMode};

use std::sync::Arc;
use tgrelay_core::{OutboundReply, Plugin, TextMessage};
use tracing::{debug, error, info, instrument};

/// Ordered list of plugins; iteration order is registration order.
#[derive(Clone, Default)]
pub struct PluginChain {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Appends a plugin. Later plugins take precedence when several reply.
    pub fn add_plugin(mut self, plugin: Arc<dyn Plugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Plugin names in chain order.
    pub fn names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name().to_string()).collect()
    }

    /// Runs every plugin against `message` and returns the reply of the last one that matched.
    ///
    /// Iteration does not stop at the first match: a later successful plugin overwrites an earlier one.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = message.id))]
    pub async fn resolve(&self, message: &TextMessage) -> Option<OutboundReply> {
        let mut candidate: Option<OutboundReply> = None;

        for plugin in &self.plugins {
            let plugin_name = plugin.name();
            match plugin.handle_message(message).await {
                Ok(reply) => {
                    info!(
                        plugin = %plugin_name,
                        reply_kind = reply.kind(),
                        replaced = candidate.is_some(),
                        "step: plugin matched"
                    );
                    candidate = Some(reply);
                }
                Err(e) if e.is_not_matched() => {
                    debug!(plugin = %plugin_name, "step: plugin not matched");
                }
                Err(e) => {
                    error!(plugin = %plugin_name, error = %e, "plugin failed");
                }
            }
        }

        candidate
    }
}

// Unit/integration tests live in tests/plugin_chain_test.rs
