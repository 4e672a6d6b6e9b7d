//! Webhook runner: registers the webhook, starts one dispatch loop per consumer queue, and serves the
//! webhook route until the process is stopped.

use std::sync::Arc;

use plugin_chain::{dispatch, dispatch_inline, InlineMode, PluginChain};
use tgrelay_core::{Bot as CoreBot, InboundUpdate, RelayError, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::bot_adapter::TelegramBotAdapter;
use crate::config::RelayConfig;
use crate::registration::{RegistrationState, WebhookApi, WebhookRegistrar, WebhookStatus};
use crate::webhook::{webhook_router, Consumer, UpdateBus};

/// Builds the teloxide client, pointing it at `telegram_api_url` when set.
pub fn build_bot(config: &RelayConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match &config.telegram_api_url {
        Some(url) => {
            let url = reqwest::Url::parse(url)
                .map_err(|e| RelayError::Config(format!("invalid TELEGRAM_API_URL: {}", e)))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

fn registrar_for(config: &RelayConfig) -> Result<WebhookRegistrar<TelegramBotAdapter>> {
    let url = config
        .webhook_url()
        .map_err(|e| RelayError::Config(e.to_string()))?;
    let adapter = TelegramBotAdapter::new(build_bot(config)?);
    Ok(WebhookRegistrar::new(adapter, url, config.debug))
}

/// Registers the webhook without serving. Used by the CLI `register` command.
pub async fn register_webhook(config: &RelayConfig) -> Result<RegistrationState> {
    let registrar = registrar_for(config)?;
    registrar.register_once().await;
    Ok(registrar.state().unwrap_or(RegistrationState::Failed))
}

/// Reads the current webhook status from Telegram.
pub async fn webhook_status(config: &RelayConfig) -> Result<WebhookStatus> {
    TelegramBotAdapter::new(build_bot(config)?)
        .webhook_status()
        .await
}

/// Text path: dispatches every queued update through the plugin chain. Ends when the queue closes.
#[instrument(skip_all)]
pub async fn run_text_loop(
    mut rx: mpsc::Receiver<InboundUpdate>,
    chain: PluginChain,
    bot: Arc<dyn CoreBot>,
) {
    info!(plugins = ?chain.names(), "text loop started");
    while let Some(update) = rx.recv().await {
        dispatch(&update, &chain, bot.as_ref()).await;
    }
    info!("text loop stopped");
}

/// Inline path: answers inline queries and forwards chosen results. Errors are logged per update.
#[instrument(skip_all)]
pub async fn run_inline_loop(
    mut rx: mpsc::Receiver<InboundUpdate>,
    inline: InlineMode,
    bot: Arc<dyn CoreBot>,
) {
    info!("inline loop started");
    while let Some(update) = rx.recv().await {
        if let Err(e) = dispatch_inline(&update, &inline, bot.as_ref()).await {
            error!(update_id = update.update_id, error = %e, "inline mode failed");
        }
    }
    info!("inline loop stopped");
}

/// Subscribes the consumer queues on `bus` and spawns their loops.
pub fn spawn_loops(
    bus: &mut UpdateBus,
    chain: PluginChain,
    inline: Option<InlineMode>,
    bot: Arc<dyn CoreBot>,
) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::new();

    let text_rx = bus.subscribe(Consumer::Text);
    handles.push(tokio::spawn(run_text_loop(text_rx, chain, bot.clone())));

    if let Some(inline) = inline {
        let inline_rx = bus.subscribe(Consumer::Inline);
        handles.push(tokio::spawn(run_inline_loop(inline_rx, inline, bot)));
    }

    handles
}

/// Runs the relay: registers the webhook once, starts the loops, and serves `/<prefix>/<token>` on
/// `0.0.0.0:<port>`. Returns only on a listen or serve failure.
#[instrument(skip_all, fields(port = config.listen_port))]
pub async fn run_webhook(
    config: RelayConfig,
    chain: PluginChain,
    inline: Option<InlineMode>,
) -> Result<()> {
    let registrar = registrar_for(&config)?;
    registrar.register_once().await;

    let bot: Arc<dyn CoreBot> = Arc::new(registrar.api().clone());

    let mut bus = UpdateBus::new(config.queue_capacity)?;
    let _loops = spawn_loops(&mut bus, chain, inline, bot);
    let router = webhook_router(&config.webhook_path(), Arc::new(bus));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.listen_port))
        .await
        .map_err(|e| RelayError::Listen(format!("bind port {}: {}", config.listen_port, e)))?;
    info!(
        port = config.listen_port,
        prefix = %config.webhook_prefix,
        "webhook receiver listening"
    );

    axum::serve(listener, router)
        .await
        .map_err(|e| RelayError::Listen(e.to_string()))
}
