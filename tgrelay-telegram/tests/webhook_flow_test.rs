//! End-to-end tests for the webhook receiver feeding the dispatch loops.
//!
//! Posts raw Telegram JSON to the axum router, lets the spawned loops dispatch it, and records what the
//! bot would have sent. No network access.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use plugin_chain::{InlineMode, PluginChain};
use tgrelay_core::{
    Bot, InlineQuery, InlineResult, InlineResultProducer, OutboundReply, Plugin, PluginError,
    PluginResult, Result, TextMessage,
};
use tgrelay_telegram::{spawn_loops, webhook_router, RelayConfig, UpdateBus};
use tokio::sync::mpsc;
use tower::ServiceExt;

/// Forwards every sent reply to the test.
struct ChannelBot {
    tx: mpsc::UnboundedSender<OutboundReply>,
}

impl ChannelBot {
    fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<OutboundReply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

#[async_trait]
impl Bot for ChannelBot {
    async fn send(&self, reply: &OutboundReply) -> Result<()> {
        let _ = self.tx.send(reply.clone());
        Ok(())
    }
}

struct PingPlugin;

#[async_trait]
impl Plugin for PingPlugin {
    async fn handle_message(&self, message: &TextMessage) -> PluginResult {
        if message.text == "/ping" {
            Ok(OutboundReply::text(message.chat.id, "pong"))
        } else {
            Err(PluginError::NotMatched)
        }
    }
}

struct EchoProducer;

#[async_trait]
impl InlineResultProducer for EchoProducer {
    async fn produce(&self, query: &InlineQuery) -> std::result::Result<Vec<InlineResult>, PluginError> {
        Ok(vec![InlineResult::article("echo", "Echo", query.query.clone())])
    }
}

fn text_update(update_id: u32, text: &str) -> String {
    format!(
        r#"{{"update_id":{},"message":{{"message_id":5,"date":1700000000,"chat":{{"id":42,"type":"private","first_name":"Ann"}},"from":{{"id":7,"is_bot":false,"first_name":"Ann"}},"text":"{}"}}}}"#,
        update_id, text
    )
}

const INLINE_UPDATE: &str = r#"{"update_id":77,"inline_query":{"id":"q-9","from":{"id":7,"is_bot":false,"first_name":"Ann"},"query":"hello","offset":""}}"#;

fn post(path: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn next_reply(rx: &mut mpsc::UnboundedReceiver<OutboundReply>) -> Option<OutboundReply> {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .ok()
        .flatten()
}

fn setup(inline: bool) -> (axum::Router, mpsc::UnboundedReceiver<OutboundReply>, String) {
    let config = RelayConfig::with_token("123:abc".to_string(), 8443);
    let (bot, rx) = ChannelBot::with_receiver();
    let chain = PluginChain::new().add_plugin(Arc::new(PingPlugin));
    let inline = inline.then(|| InlineMode::new(Arc::new(EchoProducer)));

    let mut bus = UpdateBus::new(config.queue_capacity).unwrap();
    spawn_loops(&mut bus, chain, inline, bot);
    let path = config.webhook_path();
    (webhook_router(&path, Arc::new(bus)), rx, path)
}

/// **Test: `/ping` posted to the webhook produces one "pong" reply.**
#[tokio::test]
async fn test_ping_through_webhook() {
    let (router, mut rx, path) = setup(false);

    let response = router.oneshot(post(&path, text_update(1, "/ping"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(next_reply(&mut rx).await, Some(OutboundReply::text(42, "pong")));
}

/// **Test: Unmatched text and malformed bodies are accepted with 200 and produce no reply.**
#[tokio::test]
async fn test_unmatched_and_malformed_bodies_are_silent() {
    let (router, mut rx, path) = setup(false);

    let response = router
        .clone()
        .oneshot(post(&path, text_update(2, "/unknown")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(post(&path, "{not json".to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(next_reply(&mut rx).await, None);
}

/// **Test: Requests to another path are not routed.**
#[tokio::test]
async fn test_wrong_token_path_is_not_found() {
    let (router, _rx, _path) = setup(false);

    let response = router
        .oneshot(post("/tg/wrong-token", text_update(3, "/ping")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// **Test: Inline query is answered personally by the inline loop; the text loop stays silent.**
#[tokio::test]
async fn test_inline_query_through_webhook() {
    let (router, mut rx, path) = setup(true);

    let response = router
        .oneshot(post(&path, INLINE_UPDATE.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        next_reply(&mut rx).await,
        Some(OutboundReply::InlineAnswer {
            inline_query_id: "q-9".to_string(),
            results: vec![InlineResult::article("echo", "Echo", "hello")],
            is_personal: true,
            cache_time: None,
        })
    );
    assert_eq!(next_reply(&mut rx).await, None);
}
