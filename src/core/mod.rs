//! Core types and traits: error taxonomy, logger, notification sink.

pub mod error;
pub mod logger;
pub mod notifier;

pub use error::{PollError, Result};
pub use logger::init_tracing;
pub use notifier::{Notifier, TelegramNotifier};
