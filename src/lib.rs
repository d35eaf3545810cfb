//! # Homework status bot
//!
//! Polls the homework-review API on a fixed cadence and forwards status
//! transitions to a Telegram chat. Config comes from env; loop state lives
//! only in the process and resets on restart.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod poller;
pub mod runner;

pub use api::{
    current_date, describe_status, validate_response, HomeworkRecord, HomeworkStatus,
    StatusClient, DEFAULT_ENDPOINT,
};
pub use cli::{load_config, Cli, Commands};
pub use config::{BotConfig, DEFAULT_POLL_INTERVAL_SECS};
pub use core::{init_tracing, Notifier, PollError, Result, TelegramNotifier};
pub use poller::{PollState, Poller};
pub use runner::run_bot;
