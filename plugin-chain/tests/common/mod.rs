//! Shared fixtures for plugin-chain integration tests: message builders, a recording [`Bot`], and
//! scripted plugins.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tgrelay_core::{
    Bot, Chat, InboundUpdate, OutboundReply, Plugin, PluginError, PluginResult, RelayError, Result,
    TextMessage, User,
};

pub fn create_test_message(text: &str) -> TextMessage {
    TextMessage {
        id: 10,
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        from: Some(User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        }),
        text: text.to_string(),
        reply_to_message_id: None,
    }
}

pub fn create_text_update(text: &str) -> InboundUpdate {
    InboundUpdate::from_message(1, create_test_message(text))
}

pub fn test_user() -> User {
    User {
        id: 123,
        username: Some("test_user".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

/// Bot that records every reply it is asked to send. `failing` makes every send return an error.
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<OutboundReply>>,
    pub failing: bool,
}

impl RecordingBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            failing: true,
        })
    }

    pub fn sent(&self) -> Vec<OutboundReply> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send(&self, reply: &OutboundReply) -> Result<()> {
        self.sent.lock().unwrap().push(reply.clone());
        if self.failing {
            return Err(RelayError::Bot("send rejected".to_string()));
        }
        Ok(())
    }
}

/// Plugin that always returns the same scripted outcome and counts calls.
pub struct ScriptedPlugin {
    pub outcome: PluginResult,
    pub calls: AtomicUsize,
}

impl ScriptedPlugin {
    pub fn replying(chat_id: i64, text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(OutboundReply::text(chat_id, text)),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn not_matched() -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(PluginError::NotMatched),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(PluginError::Failed(reason.to_string())),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Plugin for ScriptedPlugin {
    async fn handle_message(&self, _message: &TextMessage) -> PluginResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Replies "pong" to `/ping`, declines everything else.
pub struct PingPlugin;

#[async_trait]
impl Plugin for PingPlugin {
    fn name(&self) -> &str {
        "ping"
    }

    async fn handle_message(&self, message: &TextMessage) -> PluginResult {
        if message.text.trim() == "/ping" {
            Ok(OutboundReply::text(message.chat.id, "pong"))
        } else {
            Err(PluginError::NotMatched)
        }
    }
}
