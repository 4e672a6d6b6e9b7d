use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tgrelay_core::{OutboundReply, Plugin, PluginError, PluginResult, TextMessage};

use crate::command::Command;

/// `/clock` → "Current time: YYYY-MM-DD HH:MM:SS" in UTC.
#[derive(Debug, Clone, Copy)]
pub struct ClockPlugin {
    now: fn() -> DateTime<Utc>,
}

impl Default for ClockPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPlugin {
    pub fn new() -> Self {
        Self { now: Utc::now }
    }

    /// Uses `now` instead of the system clock.
    pub fn with_clock(now: fn() -> DateTime<Utc>) -> Self {
        Self { now }
    }
}

#[async_trait]
impl Plugin for ClockPlugin {
    fn name(&self) -> &str {
        "clock"
    }

    async fn handle_message(&self, message: &TextMessage) -> PluginResult {
        Command::matching(&message.text, "clock").ok_or(PluginError::NotMatched)?;
        let now = (self.now)().format("%Y-%m-%d %H:%M:%S");
        Ok(OutboundReply::text(
            message.chat.id,
            format!("Current time: {}", now),
        ))
    }
}
