use async_trait::async_trait;
use tgrelay_core::{OutboundReply, Plugin, PluginError, PluginResult, TextMessage};

use crate::command::Command;

/// `/ping` → "pong".
#[derive(Debug, Default, Clone, Copy)]
pub struct PingPlugin;

#[async_trait]
impl Plugin for PingPlugin {
    fn name(&self) -> &str {
        "ping"
    }

    async fn handle_message(&self, message: &TextMessage) -> PluginResult {
        Command::matching(&message.text, "ping")
            .map(|_| OutboundReply::text(message.chat.id, "pong"))
            .ok_or(PluginError::NotMatched)
    }
}
