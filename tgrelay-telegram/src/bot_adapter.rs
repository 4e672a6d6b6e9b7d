//! Wraps teloxide::Bot and implements [`tgrelay_core::Bot`] plus [`WebhookApi`]. Production code talks to
//! Telegram; tests substitute their own implementations.

use async_trait::async_trait;
use teloxide::payloads::{AnswerInlineQuerySetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::requests::JsonRequest;
use teloxide::types::{
    ChatId, InlineQueryId, InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
    InputMessageContentText, MessageId, ReplyParameters,
};
use tgrelay_core::{Bot as CoreBot, InlineResult, OutboundReply, ParseMode, RelayError, Result};

use crate::registration::{WebhookApi, WebhookStatus};

/// Thin wrapper around teloxide::Bot that implements tgrelay-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }

    /// Builds the `answerInlineQuery` request for an [`OutboundReply::InlineAnswer`].
    pub fn inline_answer_request(
        &self,
        inline_query_id: &str,
        results: &[InlineResult],
        is_personal: bool,
        cache_time: Option<u32>,
    ) -> JsonRequest<teloxide::payloads::AnswerInlineQuery> {
        let results: Vec<InlineQueryResult> = results.iter().map(to_telegram_result).collect();
        let mut req = self
            .bot
            .answer_inline_query(InlineQueryId(inline_query_id.to_string()), results)
            .is_personal(is_personal);
        if let Some(secs) = cache_time {
            req = req.cache_time(secs);
        }
        req
    }
}

fn to_telegram_parse_mode(mode: ParseMode) -> teloxide::types::ParseMode {
    match mode {
        ParseMode::Html => teloxide::types::ParseMode::Html,
        ParseMode::MarkdownV2 => teloxide::types::ParseMode::MarkdownV2,
    }
}

/// Maps a core inline result to a Telegram article.
pub fn to_telegram_result(result: &InlineResult) -> InlineQueryResult {
    let content =
        InputMessageContent::Text(InputMessageContentText::new(result.message_text.clone()));
    let mut article =
        InlineQueryResultArticle::new(result.id.clone(), result.title.clone(), content);
    if let Some(description) = &result.description {
        article = article.description(description.clone());
    }
    InlineQueryResult::Article(article)
}

fn bot_error(e: impl std::fmt::Display) -> RelayError {
    RelayError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send(&self, reply: &OutboundReply) -> Result<()> {
        match reply {
            OutboundReply::Text {
                chat_id,
                text,
                reply_to_message_id,
                parse_mode,
            } => {
                let mut req = self.bot.send_message(ChatId(*chat_id), text.clone());
                if let Some(id) = reply_to_message_id {
                    req = req.reply_parameters(
                        ReplyParameters::new(MessageId(*id)).allow_sending_without_reply(),
                    );
                }
                if let Some(mode) = parse_mode {
                    req = req.parse_mode(to_telegram_parse_mode(*mode));
                }
                req.await.map_err(bot_error)?;
            }
            OutboundReply::InlineAnswer {
                inline_query_id,
                results,
                is_personal,
                cache_time,
            } => {
                self.inline_answer_request(inline_query_id, results, *is_personal, *cache_time)
                    .await
                    .map_err(bot_error)?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl WebhookApi for TelegramBotAdapter {
    async fn delete_webhook(&self) -> Result<()> {
        self.bot
            .delete_webhook()
            .await
            .map_err(|e| RelayError::Registration(e.to_string()))?;
        Ok(())
    }

    async fn set_webhook(&self, url: reqwest::Url) -> Result<()> {
        self.bot
            .set_webhook(url)
            .await
            .map_err(|e| RelayError::Registration(e.to_string()))?;
        Ok(())
    }

    async fn webhook_status(&self) -> Result<WebhookStatus> {
        let info = self
            .bot
            .get_webhook_info()
            .await
            .map_err(|e| RelayError::Registration(e.to_string()))?;
        Ok(WebhookStatus {
            url: info.url.map(|u| u.to_string()),
            pending_update_count: info.pending_update_count as u64,
            last_error_message: info.last_error_message,
            last_error_date: info.last_error_date.map(|d| d.to_string()),
        })
    }
}
