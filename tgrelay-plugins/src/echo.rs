use async_trait::async_trait;
use tgrelay_core::{OutboundReply, Plugin, PluginError, PluginResult, TextMessage};
use tracing::debug;

use crate::command::Command;

/// `/echo <text>` → `<text>`, quoting the original message. A bare `/echo` is an invalid command.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoPlugin;

#[async_trait]
impl Plugin for EchoPlugin {
    fn name(&self) -> &str {
        "echo"
    }

    async fn handle_message(&self, message: &TextMessage) -> PluginResult {
        let cmd = Command::matching(&message.text, "echo").ok_or(PluginError::NotMatched)?;
        if cmd.args.is_empty() {
            return Err(PluginError::InvalidCommand(
                "/echo needs some text to repeat".to_string(),
            ));
        }
        debug!(chat_id = message.chat.id, len = cmd.args.len(), "Echoing message");
        Ok(OutboundReply::reply_to(message, cmd.args))
    }
}
