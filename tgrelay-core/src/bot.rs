//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in tgrelay-telegram.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::OutboundReply;

/// Sends an [`OutboundReply`] through a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    async fn send(&self, reply: &OutboundReply) -> Result<()>;
}
