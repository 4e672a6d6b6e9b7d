//! CLI parser and config loading.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tgrelay_telegram::RelayConfig;

#[derive(Parser, Debug)]
#[command(name = "tgrelay")]
#[command(about = "Telegram webhook relay", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Bot token; overrides BOTKEY.
    #[arg(short, long)]
    pub token: Option<String>,
    /// Webhook listen port; overrides LISTENPORT.
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Debug logging and webhook info after registration; same as RELAY_DEBUG=1.
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register the webhook and serve updates (config from env).
    Run {
        #[command(flatten)]
        config: ConfigArgs,
        /// Disable inline-mode handling.
        #[arg(long)]
        no_inline: bool,
    },
    /// Register the webhook with Telegram and exit.
    Register {
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the webhook status reported by Telegram.
    WebhookInfo {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Load and validate [`RelayConfig`] from environment, applying CLI overrides.
pub fn load_config(args: &ConfigArgs) -> Result<RelayConfig> {
    let mut config = RelayConfig::load(args.token.clone(), args.port)?;
    if args.debug {
        config.debug = true;
    }
    config.validate()?;
    Ok(config)
}
