//! Webhook receiver: an axum route at `/<prefix>/<token>` that decodes Telegram updates and publishes each
//! one into every consumer queue.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Router};
use tgrelay_core::{InboundUpdate, RelayError, Result};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::adapters::decode_update;

/// Logical consumers of the update stream; each gets its own bounded queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consumer {
    Text,
    Inline,
}

/// Fan-out of inbound updates to one bounded queue per consumer.
///
/// Subscriptions are taken before the bus is shared with the HTTP server; after that the queue list is
/// read-only.
pub struct UpdateBus {
    capacity: usize,
    queues: Vec<(Consumer, mpsc::Sender<InboundUpdate>)>,
}

impl UpdateBus {
    /// Each queue holds up to `capacity` updates; zero is rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RelayError::Config(
                "update queue capacity must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            queues: Vec::new(),
        })
    }

    /// Adds a queue for `consumer` and returns its receiving end.
    pub fn subscribe(&mut self, consumer: Consumer) -> mpsc::Receiver<InboundUpdate> {
        let (tx, rx) = mpsc::channel(self.capacity);
        self.queues.push((consumer, tx));
        rx
    }

    pub fn consumers(&self) -> Vec<Consumer> {
        self.queues.iter().map(|(c, _)| *c).collect()
    }

    /// Publishes `update` once into every queue, waiting while a queue is full. Returns how many queues
    /// accepted it; closed queues are skipped.
    pub async fn publish(&self, update: InboundUpdate) -> usize {
        let mut delivered = 0;
        for (consumer, tx) in &self.queues {
            match tx.send(update.clone()).await {
                Ok(()) => delivered += 1,
                Err(_) => warn!(
                    consumer = ?consumer,
                    update_id = update.update_id,
                    "consumer queue closed, update dropped"
                ),
            }
        }
        delivered
    }
}

/// Router serving the webhook at `path`.
pub fn webhook_router(path: &str, bus: Arc<UpdateBus>) -> Router {
    Router::new()
        .route(path, post(receive_update))
        .with_state(bus)
}

/// Always answers 200; bodies that are not a supported update are dropped.
async fn receive_update(State(bus): State<Arc<UpdateBus>>, body: Bytes) -> StatusCode {
    debug!(body = %String::from_utf8_lossy(&body), "raw webhook body");

    match decode_update(&body) {
        Some(update) => {
            let delivered = bus.publish(update).await;
            debug!(delivered, "update published");
        }
        None => debug!("webhook body ignored"),
    }

    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgrelay_core::{Chat, TextMessage};

    fn update(id: u32) -> InboundUpdate {
        InboundUpdate::from_message(
            id,
            TextMessage {
                id: 1,
                chat: Chat {
                    id: 42,
                    chat_type: "private".to_string(),
                },
                from: None,
                text: "hi".to_string(),
                reply_to_message_id: None,
            },
        )
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(UpdateBus::new(0), Err(RelayError::Config(_))));
        assert!(UpdateBus::new(1).is_ok());
    }

    #[tokio::test]
    async fn test_publish_reaches_every_consumer_once() {
        let mut bus = UpdateBus::new(4).unwrap();
        let mut text_rx = bus.subscribe(Consumer::Text);
        let mut inline_rx = bus.subscribe(Consumer::Inline);

        assert_eq!(bus.publish(update(1)).await, 2);

        assert_eq!(text_rx.recv().await.unwrap().update_id, 1);
        assert_eq!(inline_rx.recv().await.unwrap().update_id, 1);
        assert!(text_rx.try_recv().is_err());
        assert!(inline_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_closed_queue_is_skipped() {
        let mut bus = UpdateBus::new(4).unwrap();
        let text_rx = bus.subscribe(Consumer::Text);
        let mut inline_rx = bus.subscribe(Consumer::Inline);
        drop(text_rx);

        assert_eq!(bus.publish(update(2)).await, 1);
        assert_eq!(inline_rx.recv().await.unwrap().update_id, 2);
    }

    #[tokio::test]
    async fn test_queue_preserves_order() {
        let mut bus = UpdateBus::new(8).unwrap();
        let mut rx = bus.subscribe(Consumer::Text);

        for id in 1..=3 {
            bus.publish(update(id)).await;
        }

        for id in 1..=3 {
            assert_eq!(rx.recv().await.unwrap().update_id, id);
        }
        assert_eq!(bus.consumers(), vec![Consumer::Text]);
    }
}
