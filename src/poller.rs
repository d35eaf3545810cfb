//! The polling loop: fetch → validate → describe → notify → sleep.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::api::{current_date, describe_status, validate_response, StatusClient};
use crate::core::{Notifier, PollError, Result};

/// Loop-local state. Never persisted; a restart starts over from "now".
#[derive(Debug, Default)]
pub struct PollState {
    /// Text of the last successfully sent status notification.
    pub last_status: String,
    /// Text of the last successfully sent diagnostic message.
    pub last_error: String,
    /// `from_date` for the next fetch (epoch seconds).
    pub timestamp: i64,
}

/// Polls the status endpoint on a fixed cadence and forwards status
/// transitions to the notifier. Strictly sequential; the only state is
/// [`PollState`].
pub struct Poller {
    client: StatusClient,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    state: PollState,
}

impl Poller {
    /// Creates a poller whose first fetch asks for changes since `since`.
    pub fn new(
        client: StatusClient,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        since: i64,
    ) -> Self {
        Self {
            client,
            notifier,
            interval,
            state: PollState {
                timestamp: since,
                ..PollState::default()
            },
        }
    }

    /// Current loop state (read-only; tests assert on it).
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Runs forever with the fixed inter-iteration sleep. The sleep happens
    /// unconditionally, whatever the iteration body did.
    pub async fn run(&mut self) {
        info!(interval_secs = self.interval.as_secs(), "Poller started");
        loop {
            self.poll_once().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One iteration body: fetch, validate, describe, notify, dedup. No
    /// sleep, so tests can drive iterations directly.
    pub async fn poll_once(&mut self) {
        match self.check_status().await {
            Ok(Some((text, new_date))) => {
                if text == self.state.last_status {
                    debug!("Homework status unchanged");
                    return;
                }
                match self.notifier.send_message(&text).await {
                    Ok(()) => {
                        debug!(message = %text, "Status notification sent");
                        self.state.last_status = text;
                        if let Some(date) = new_date {
                            self.state.timestamp = date;
                        }
                    }
                    // State stays put so the same message is retried next cycle.
                    Err(e) => error!(error = %e, "Failed to send status notification"),
                }
            }
            Ok(None) => debug!("No homework updates"),
            Err(e) => self.report_error(e).await,
        }
    }

    /// Fetches and interprets one response. `Ok(None)` means no update.
    async fn check_status(&self) -> Result<Option<(String, Option<i64>)>> {
        let response = self.client.fetch(self.state.timestamp).await?;
        let homeworks = validate_response(&response)?;
        let first = match homeworks.first() {
            Some(first) => first,
            None => return Ok(None),
        };
        let text = describe_status(first)?;
        Ok(Some((text, current_date(&response))))
    }

    /// Routes a per-iteration error through the deduplicated diagnostic path:
    /// the same failure mode is reported to the chat once, not every cycle.
    async fn report_error(&mut self, error: PollError) {
        let diagnostic = format!("Сбой в работе программы: {}", error);
        error!(error = %error, "Poll iteration failed");
        if diagnostic == self.state.last_error {
            return;
        }
        match self.notifier.send_message(&diagnostic).await {
            Ok(()) => self.state.last_error = diagnostic,
            Err(e) => error!(error = %e, "Failed to send diagnostic message"),
        }
    }
}
