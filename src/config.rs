//! Bot config: API and Telegram credentials, endpoint overrides, cadence, log file. Loaded from env.

use anyhow::Result;
use std::env;

use crate::api::client::DEFAULT_ENDPOINT;

/// Default seconds between poll iterations.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Full bot config. All three secrets are required; the rest have defaults.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// PRACTICUM_TOKEN
    pub practicum_token: String,
    /// BOT_TOKEN
    pub bot_token: String,
    /// CHAT_ID
    pub chat_id: i64,
    /// ENDPOINT_URL; defaults to the production endpoint
    pub endpoint_url: String,
    /// TELEGRAM_API_URL (tests point this at a mock server)
    pub telegram_api_url: Option<String>,
    /// POLL_INTERVAL_SECS
    pub poll_interval_secs: u64,
    /// Log file path
    pub log_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides PRACTICUM_TOKEN if provided.
    /// Each missing required variable is reported by name.
    pub fn load(token: Option<String>) -> Result<Self> {
        let practicum_token = match token {
            Some(t) => t,
            None => required("PRACTICUM_TOKEN")?,
        };
        let bot_token = required("BOT_TOKEN")?;
        let chat_id = required("CHAT_ID")?
            .parse()
            .map_err(|_| anyhow::anyhow!("CHAT_ID is not a valid chat id"))?;
        let endpoint_url =
            env::var("ENDPOINT_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL").ok();
        let poll_interval_secs = env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/homework-bot.log".to_string());

        Ok(Self {
            practicum_token,
            bot_token,
            chat_id,
            endpoint_url,
            telegram_api_url,
            poll_interval_secs,
            log_file,
        })
    }

    /// Validate config (URLs must parse, the interval must not be zero).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.endpoint_url).is_err() {
            anyhow::bail!("ENDPOINT_URL is not a valid URL: {}", self.endpoint_url);
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("TELEGRAM_API_URL is set but not a valid URL: {}", url_str);
            }
        }
        if self.poll_interval_secs == 0 {
            anyhow::bail!("POLL_INTERVAL_SECS must be greater than zero");
        }
        Ok(())
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| anyhow::anyhow!("Required environment variable is not set: {}", name))
}
