//! Relay config: bot token, listen port, webhook URL parts, API URL, queue size, logging.
//! Loaded from environment: BOTKEY, LISTENPORT, WEBHOOK_DOMAIN, WEBHOOK_PREFIX, TELEGRAM_API_URL,
//! UPDATE_QUEUE_CAPACITY, LOG_FILE, RELAY_DEBUG.

use anyhow::{Context, Result};
use std::env;

/// Public domain Telegram calls back on, reverse-proxied to the local listener.
pub const DEFAULT_WEBHOOK_DOMAIN: &str = "https://api.scnace.me";
pub const DEFAULT_WEBHOOK_PREFIX: &str = "tg";
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// BOTKEY
    pub bot_token: String,
    /// LISTENPORT
    pub listen_port: u16,
    /// WEBHOOK_DOMAIN
    pub webhook_domain: String,
    /// WEBHOOK_PREFIX; first path segment of the webhook route
    pub webhook_prefix: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// UPDATE_QUEUE_CAPACITY; bound of each consumer queue
    pub queue_capacity: usize,
    /// LOG_FILE
    pub log_file: Option<String>,
    /// RELAY_DEBUG
    pub debug: bool,
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl RelayConfig {
    /// Load from environment variables. `token` overrides BOTKEY and `port` overrides LISTENPORT.
    pub fn load(token: Option<String>, port: Option<u16>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOTKEY").map_err(|_| anyhow::anyhow!("BOTKEY not set"))?,
        };
        let listen_port = match port {
            Some(p) => p,
            None => env::var("LISTENPORT")
                .map_err(|_| anyhow::anyhow!("LISTENPORT not set"))?
                .parse()
                .context("LISTENPORT is not a valid port")?,
        };
        let webhook_domain =
            env::var("WEBHOOK_DOMAIN").unwrap_or_else(|_| DEFAULT_WEBHOOK_DOMAIN.to_string());
        let webhook_prefix =
            env::var("WEBHOOK_PREFIX").unwrap_or_else(|_| DEFAULT_WEBHOOK_PREFIX.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let queue_capacity = match env::var("UPDATE_QUEUE_CAPACITY") {
            Ok(value) => value
                .parse()
                .context("UPDATE_QUEUE_CAPACITY is not a valid number")?,
            Err(_) => DEFAULT_QUEUE_CAPACITY,
        };
        let log_file = env::var("LOG_FILE").ok();
        let debug = env::var("RELAY_DEBUG").map(|v| parse_bool(&v)).unwrap_or(false);

        Ok(Self {
            bot_token,
            listen_port,
            webhook_domain,
            webhook_prefix,
            telegram_api_url,
            queue_capacity,
            log_file,
            debug,
        })
    }

    /// Load from environment only.
    pub fn from_env() -> Result<Self> {
        Self::load(None, None)
    }

    /// Build with the given token and port; everything else takes its default.
    pub fn with_token(bot_token: String, listen_port: u16) -> Self {
        Self {
            bot_token,
            listen_port,
            webhook_domain: DEFAULT_WEBHOOK_DOMAIN.to_string(),
            webhook_prefix: DEFAULT_WEBHOOK_PREFIX.to_string(),
            telegram_api_url: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            log_file: None,
            debug: false,
        }
    }

    /// Local route the webhook receiver serves: `/<prefix>/<token>`.
    pub fn webhook_path(&self) -> String {
        format!("/{}/{}", self.webhook_prefix.trim_matches('/'), self.bot_token)
    }

    /// Public URL registered with Telegram: `<domain>/<prefix>/<token>`.
    pub fn webhook_url(&self) -> Result<reqwest::Url> {
        let url = format!(
            "{}{}",
            self.webhook_domain.trim_end_matches('/'),
            self.webhook_path()
        );
        reqwest::Url::parse(&url).with_context(|| format!("invalid webhook URL: {}", url))
    }

    /// Validate config: non-empty token, non-zero port and capacity, valid URLs.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOTKEY is empty");
        }
        if self.listen_port == 0 {
            anyhow::bail!("LISTENPORT must be non-zero");
        }
        if self.queue_capacity == 0 {
            anyhow::bail!("UPDATE_QUEUE_CAPACITY must be greater than zero");
        }
        self.webhook_url()?;
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
