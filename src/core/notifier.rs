//! Notification sink abstraction.
//!
//! [`Notifier`] is transport-agnostic; [`TelegramNotifier`] implements it via
//! teloxide. Production code sends to one fixed chat; tests can substitute a
//! recording impl.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::debug;

use super::error::{PollError, Result};

/// Abstraction for delivering one text message to the configured recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a text message to the configured chat.
    async fn send_message(&self, text: &str) -> Result<()>;
}

/// Teloxide-based implementation of [`Notifier`] bound to a single chat.
#[derive(Debug)]
pub struct TelegramNotifier {
    bot: teloxide::Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    /// Creates a notifier for the given bot token and chat. `api_url`
    /// overrides the Telegram API root (tests point it at a local mock).
    pub fn new(token: &str, chat_id: i64, api_url: Option<&str>) -> Result<Self> {
        let bot = teloxide::Bot::new(token);
        let bot = match api_url {
            Some(url_str) => {
                let url = reqwest::Url::parse(url_str).map_err(|e| {
                    PollError::Config(format!(
                        "TELEGRAM_API_URL is set but not a valid URL: {}",
                        e
                    ))
                })?;
                bot.set_api_url(url)
            }
            None => bot,
        };
        Ok(Self {
            bot,
            chat_id: ChatId(chat_id),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, text: &str) -> Result<()> {
        self.bot
            .send_message(self.chat_id, text.to_string())
            .await
            .map_err(|e| PollError::Bot(e.to_string()))?;
        debug!(chat_id = self.chat_id.0, "Message sent");
        Ok(())
    }
}
