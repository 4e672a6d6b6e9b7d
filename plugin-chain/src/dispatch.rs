//! Update dispatch: the text-message path through the plugin chain and the inline-query path.

use std::sync::Arc;

use tgrelay_core::{Bot, ChosenResultHandler, InboundUpdate, InlineResultProducer, OutboundReply, Result};
use tracing::{debug, error, info, instrument, warn};

use crate::PluginChain;

/// Inline-mode collaborators: a required result producer and an optional chosen-result handler.
#[derive(Clone)]
pub struct InlineMode {
    pub producer: Arc<dyn InlineResultProducer>,
    pub chosen_handler: Option<Arc<dyn ChosenResultHandler>>,
}

impl InlineMode {
    pub fn new(producer: Arc<dyn InlineResultProducer>) -> Self {
        Self {
            producer,
            chosen_handler: None,
        }
    }

    pub fn with_chosen_handler(mut self, handler: Arc<dyn ChosenResultHandler>) -> Self {
        self.chosen_handler = Some(handler);
        self
    }
}

/// Sends at most one reply for the update's text message.
///
/// Updates without a message are ignored. When no plugin produced a reply nothing is sent. A send failure
/// is logged and swallowed so the caller's loop keeps going.
#[instrument(skip_all, fields(update_id = update.update_id))]
pub async fn dispatch(update: &InboundUpdate, chain: &PluginChain, bot: &dyn Bot) {
    let Some(message) = update.message.as_ref() else {
        debug!(kind = update.kind(), "update has no message, skipped");
        return;
    };

    let Some(reply) = chain.resolve(message).await else {
        debug!(chat_id = message.chat.id, "no plugin replied");
        return;
    };

    match bot.send(&reply).await {
        Ok(()) => info!(chat_id = message.chat.id, reply_kind = reply.kind(), "reply sent"),
        Err(e) => error!(chat_id = message.chat.id, error = %e, "send message failed"),
    }
}

/// Handles the inline side of an update.
///
/// A chosen inline result goes to the chosen handler (when configured) and ends processing of the
/// update. Otherwise an inline query is answered with the producer's results, marked personal. A producer
/// error skips the answer; handler and send errors are returned.
#[instrument(skip_all, fields(update_id = update.update_id))]
pub async fn dispatch_inline(update: &InboundUpdate, inline: &InlineMode, bot: &dyn Bot) -> Result<()> {
    if let (Some(chosen), Some(handler)) = (
        update.chosen_inline_result.as_ref(),
        inline.chosen_handler.as_ref(),
    ) {
        info!(result_id = %chosen.result_id, "step: chosen inline result");
        return handler.on_chosen(chosen, bot).await;
    }

    let Some(query) = update.inline_query.as_ref() else {
        debug!(kind = update.kind(), "update has no inline query, skipped");
        return Ok(());
    };

    let results = match inline.producer.produce(query).await {
        Ok(results) => results,
        Err(e) => {
            warn!(query_id = %query.id, error = %e, "inline producer failed, query not answered");
            return Ok(());
        }
    };

    let count = results.len();
    bot.send(&OutboundReply::inline_answer(query.id.clone(), results))
        .await?;
    info!(query_id = %query.id, results = count, "inline query answered");
    Ok(())
}
