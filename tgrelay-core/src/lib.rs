//! # tgrelay-core
//!
//! Core types and traits for the webhook relay: [`Bot`], [`Plugin`], inline-mode traits, inbound update and
//! outbound reply types, errors, and tracing initialization. Transport-agnostic; used by plugin-chain and
//! tgrelay-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod plugin;
pub mod types;

pub use bot::Bot;
pub use error::{PluginError, RelayError, Result};
pub use logger::init_tracing;
pub use plugin::{ChosenResultHandler, InlineResultProducer, Plugin, PluginResult};
pub use types::{
    Chat, ChosenInlineResult, InboundUpdate, InlineQuery, InlineResult, OutboundReply, ParseMode,
    TextMessage, User,
};
