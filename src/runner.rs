//! Entry wiring: logging, config validation, client and notifier assembly, then the loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::api::StatusClient;
use crate::config::BotConfig;
use crate::core::{init_tracing, TelegramNotifier};
use crate::poller::Poller;

/// Main entry: validate config, init logging, build the client and notifier,
/// then poll forever. Only startup failures return; the loop itself never
/// ends.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    if let Some(dir) = std::path::Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(dir)?;
    }
    init_tracing(&config.log_file)?;

    info!(
        endpoint = %config.endpoint_url,
        chat_id = config.chat_id,
        interval_secs = config.poll_interval_secs,
        "Starting homework bot"
    );

    let notifier = Arc::new(TelegramNotifier::new(
        &config.bot_token,
        config.chat_id,
        config.telegram_api_url.as_deref(),
    )?);
    let client = StatusClient::new(
        config.endpoint_url.clone(),
        config.practicum_token.clone(),
    );

    let since = chrono::Utc::now().timestamp();
    let mut poller = Poller::new(
        client,
        notifier,
        Duration::from_secs(config.poll_interval_secs),
        since,
    );
    poller.run().await;

    Ok(())
}
