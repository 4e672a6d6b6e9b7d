//! Core types: user, chat, inbound update variants, and outbound replies.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (private, group, channel) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A message delivered to the bot. `text` is empty for non-text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMessage {
    pub id: i32,
    pub chat: Chat,
    pub from: Option<User>,
    pub text: String,
    pub reply_to_message_id: Option<i32>,
}

/// An inline query typed as `@bot <query>` in any chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    pub query: String,
    pub offset: String,
}

/// The inline result a user picked and sent to a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    pub query: String,
    pub inline_message_id: Option<String>,
}

/// One inbound event. Updates decoded from Telegram carry exactly one of the three fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundUpdate {
    pub update_id: u32,
    pub message: Option<TextMessage>,
    pub inline_query: Option<InlineQuery>,
    pub chosen_inline_result: Option<ChosenInlineResult>,
}

impl InboundUpdate {
    pub fn from_message(update_id: u32, message: TextMessage) -> Self {
        Self {
            update_id,
            message: Some(message),
            ..Self::default()
        }
    }

    pub fn from_inline_query(update_id: u32, query: InlineQuery) -> Self {
        Self {
            update_id,
            inline_query: Some(query),
            ..Self::default()
        }
    }

    pub fn from_chosen_inline_result(update_id: u32, chosen: ChosenInlineResult) -> Self {
        Self {
            update_id,
            chosen_inline_result: Some(chosen),
            ..Self::default()
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        if self.message.is_some() {
            "message"
        } else if self.chosen_inline_result.is_some() {
            "chosen_inline_result"
        } else if self.inline_query.is_some() {
            "inline_query"
        } else {
            "empty"
        }
    }
}

/// Text formatting mode for [`OutboundReply::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Html,
    MarkdownV2,
}

/// A single inline answer entry, rendered by Telegram as an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineResult {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub message_text: String,
}

impl InlineResult {
    pub fn article(
        id: impl Into<String>,
        title: impl Into<String>,
        message_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            message_text: message_text.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Anything the bot can send back. Built by a plugin or dispatcher, handed to [`crate::Bot::send`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutboundReply {
    Text {
        chat_id: i64,
        text: String,
        reply_to_message_id: Option<i32>,
        parse_mode: Option<ParseMode>,
    },
    InlineAnswer {
        inline_query_id: String,
        results: Vec<InlineResult>,
        /// Results are specific to the requesting user; Telegram must not share its cache across users.
        is_personal: bool,
        cache_time: Option<u32>,
    },
}

impl OutboundReply {
    /// Plain text sent to `chat_id`.
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        OutboundReply::Text {
            chat_id,
            text: text.into(),
            reply_to_message_id: None,
            parse_mode: None,
        }
    }

    /// Plain text sent to the message's chat, quoting the message.
    pub fn reply_to(message: &TextMessage, text: impl Into<String>) -> Self {
        OutboundReply::Text {
            chat_id: message.chat.id,
            text: text.into(),
            reply_to_message_id: Some(message.id),
            parse_mode: None,
        }
    }

    /// Personal inline answer for `inline_query_id`.
    pub fn inline_answer(inline_query_id: impl Into<String>, results: Vec<InlineResult>) -> Self {
        OutboundReply::InlineAnswer {
            inline_query_id: inline_query_id.into(),
            results,
            is_personal: true,
            cache_time: None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            OutboundReply::Text { .. } => "text",
            OutboundReply::InlineAnswer { .. } => "inline_answer",
        }
    }
}
