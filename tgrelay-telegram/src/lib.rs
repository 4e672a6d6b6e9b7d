//! # tgrelay-telegram
//!
//! Telegram layer: teloxide adapters, [`tgrelay_core::Bot`] implementation, config, webhook receiver,
//! one-time webhook registration, and the dispatch loops.
//! Handles only Telegram connectivity and dispatch; plugins are supplied by the caller.

mod adapters;
mod bot_adapter;
mod config;
mod registration;
mod runner;
mod webhook;

pub use adapters::{decode_update, to_inbound_update, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{to_telegram_result, TelegramBotAdapter};
pub use config::{
    RelayConfig, DEFAULT_QUEUE_CAPACITY, DEFAULT_WEBHOOK_DOMAIN, DEFAULT_WEBHOOK_PREFIX,
};
pub use registration::{RegistrationState, WebhookApi, WebhookRegistrar, WebhookStatus};
pub use runner::{
    build_bot, register_webhook, run_inline_loop, run_text_loop, run_webhook, spawn_loops,
    webhook_status,
};
pub use webhook::{webhook_router, Consumer, UpdateBus};
