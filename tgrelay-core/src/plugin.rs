//! Plugin contracts: text-message plugins and the inline-mode pair (result producer, chosen handler).

use async_trait::async_trait;

use crate::bot::Bot;
use crate::error::PluginError;
use crate::types::{ChosenInlineResult, InlineQuery, InlineResult, OutboundReply, TextMessage};

/// Outcome of a single plugin invocation.
pub type PluginResult = std::result::Result<OutboundReply, PluginError>;

/// Produces a reply for a text message, or declines with [`PluginError::NotMatched`].
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Name used in logs. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    async fn handle_message(&self, message: &TextMessage) -> PluginResult;
}

/// Builds the result list for an inline query.
#[async_trait]
pub trait InlineResultProducer: Send + Sync {
    async fn produce(
        &self,
        query: &InlineQuery,
    ) -> std::result::Result<Vec<InlineResult>, PluginError>;
}

/// Reacts to the inline result a user picked. Gets the bot so it may send follow-ups.
#[async_trait]
pub trait ChosenResultHandler: Send + Sync {
    async fn on_chosen(&self, chosen: &ChosenInlineResult, bot: &dyn Bot) -> crate::error::Result<()>;
}
