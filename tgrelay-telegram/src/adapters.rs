//! Adapters from Telegram (teloxide) types to tgrelay_core types.
//! Depends only on teloxide and tgrelay_core type definitions.

use teloxide::types::{Update, UpdateKind};
use tgrelay_core::{Chat, ChosenInlineResult, InboundUpdate, InlineQuery, TextMessage, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`TextMessage`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    pub fn to_core(&self) -> TextMessage {
        TextMessage {
            id: self.0.id.0,
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type(&self.0.chat),
            },
            from: self.0.from.as_ref().map(|u| TelegramUserWrapper(u).to_core()),
            text: self.0.text().unwrap_or("").to_string(),
            reply_to_message_id: self.0.reply_to_message().map(|m| m.id.0),
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> String {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
    .to_string()
}

/// Converts a decoded Telegram update. Kinds the relay does not handle yield `None`.
pub fn to_inbound_update(update: &Update) -> Option<InboundUpdate> {
    let update_id = update.id.0;
    match &update.kind {
        UpdateKind::Message(msg) => Some(InboundUpdate::from_message(
            update_id,
            TelegramMessageWrapper(msg).to_core(),
        )),
        UpdateKind::InlineQuery(query) => Some(InboundUpdate::from_inline_query(
            update_id,
            InlineQuery {
                id: query.id.to_string(),
                from: TelegramUserWrapper(&query.from).to_core(),
                query: query.query.clone(),
                offset: query.offset.clone(),
            },
        )),
        UpdateKind::ChosenInlineResult(chosen) => Some(InboundUpdate::from_chosen_inline_result(
            update_id,
            ChosenInlineResult {
                result_id: chosen.result_id.to_string(),
                from: TelegramUserWrapper(&chosen.from).to_core(),
                query: chosen.query.clone(),
                inline_message_id: chosen.inline_message_id.as_ref().map(|id| id.to_string()),
            },
        )),
        _ => None,
    }
}

/// Best-effort decode of a webhook body. Malformed JSON and unsupported kinds yield `None`.
pub fn decode_update(body: &[u8]) -> Option<InboundUpdate> {
    match serde_json::from_slice::<Update>(body) {
        Ok(update) => to_inbound_update(&update),
        Err(e) => {
            tracing::debug!(error = %e, "webhook body is not a telegram update");
            None
        }
    }
}
