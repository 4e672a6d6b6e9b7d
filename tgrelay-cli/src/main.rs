//! tgrelay CLI: serve the webhook relay, register the webhook, or inspect it. Config from env and
//! optional CLI args.

use anyhow::Result;
use clap::Parser;
use tgrelay_cli::{default_chain, default_inline_mode, load_config, Cli, Commands, RelayConfig};
use tgrelay_core::init_tracing;
use tgrelay_telegram::{register_webhook, run_webhook, webhook_status, RegistrationState};
use tracing::{info, warn};

fn init_logging(config: &RelayConfig) -> Result<()> {
    init_tracing(config.log_file.as_deref(), config.debug)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, no_inline } => {
            let config = load_config(&config)?;
            init_logging(&config)?;
            let inline = (!no_inline).then(default_inline_mode);
            info!(
                port = config.listen_port,
                inline = inline.is_some(),
                debug = config.debug,
                "tgrelay starting"
            );
            run_webhook(config, default_chain(), inline).await?;
            Ok(())
        }
        Commands::Register { config } => {
            let config = load_config(&config)?;
            init_logging(&config)?;
            match register_webhook(&config).await? {
                RegistrationState::Registered => {
                    let url = config.webhook_url()?;
                    println!("Webhook registered: {}", url.host_str().unwrap_or("-"));
                    Ok(())
                }
                RegistrationState::Failed => {
                    warn!("webhook registration failed");
                    anyhow::bail!("webhook registration failed (see log)")
                }
            }
        }
        Commands::WebhookInfo { config } => {
            let config = load_config(&config)?;
            let status = webhook_status(&config).await?;
            println!("url: {}", status.url.as_deref().unwrap_or("-"));
            println!("pending updates: {}", status.pending_update_count);
            println!(
                "last error: {} ({})",
                status.last_error_message.as_deref().unwrap_or("-"),
                status.last_error_date.as_deref().unwrap_or("-")
            );
            Ok(())
        }
    }
}
