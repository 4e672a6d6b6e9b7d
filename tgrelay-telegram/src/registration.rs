//! One-time webhook registration with Telegram.
//!
//! [`WebhookRegistrar::register_once`] clears any previous webhook and sets the new URL at most once per
//! registrar, however many callers race on it. Failures are logged and leave the relay running degraded.

use async_trait::async_trait;
use tgrelay_core::Result;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, instrument, warn};

/// Snapshot of `getWebhookInfo`, kept transport-neutral for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookStatus {
    pub url: Option<String>,
    pub pending_update_count: u64,
    pub last_error_message: Option<String>,
    pub last_error_date: Option<String>,
}

/// Webhook management calls against the platform.
#[async_trait]
pub trait WebhookApi: Send + Sync {
    async fn delete_webhook(&self) -> Result<()>;
    async fn set_webhook(&self, url: reqwest::Url) -> Result<()>;
    async fn webhook_status(&self) -> Result<WebhookStatus>;
}

/// Final state of the single registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    Registered,
    Failed,
}

pub struct WebhookRegistrar<A: WebhookApi> {
    api: A,
    url: reqwest::Url,
    debug: bool,
    state: OnceCell<RegistrationState>,
}

impl<A: WebhookApi> WebhookRegistrar<A> {
    pub fn new(api: A, url: reqwest::Url, debug: bool) -> Self {
        Self {
            api,
            url,
            debug,
            state: OnceCell::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Outcome of the registration, if it has run.
    pub fn state(&self) -> Option<RegistrationState> {
        self.state.get().copied()
    }

    /// Registers the webhook unless a previous call already did. Concurrent callers wait for the first
    /// one to finish. Returns true only to the caller that performed the registration.
    pub async fn register_once(&self) -> bool {
        let mut performed = false;
        self.state
            .get_or_init(|| {
                performed = true;
                self.register()
            })
            .await;
        performed
    }

    #[instrument(skip(self))]
    async fn register(&self) -> RegistrationState {
        if let Err(e) = self.api.delete_webhook().await {
            warn!(error = %e, "remove previous webhook failed");
        }

        if let Err(e) = self.api.set_webhook(self.url.clone()).await {
            error!(error = %e, "set webhook failed");
            return RegistrationState::Failed;
        }
        info!(host = ?self.url.host_str(), "webhook registered");

        if self.debug {
            match self.api.webhook_status().await {
                Ok(status) => debug!(
                    url = ?status.url,
                    pending_update_count = status.pending_update_count,
                    last_error_message = ?status.last_error_message,
                    last_error_date = ?status.last_error_date,
                    "webhook info"
                ),
                Err(e) => error!(error = %e, "get webhook info failed"),
            }
        }

        RegistrationState::Registered
    }
}
