//! Logging initialization for the bot: human-readable lines to stdout and an append-mode log file.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Local time in `YYYY-MM-DD HH:MM:SS`; the poll cadence makes sub-second
/// precision pointless in the log.
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Initializes the global tracing subscriber.
///
/// Lines look like `YYYY-MM-DD HH:MM:SS LEVEL [target] message key=value ...`,
/// teed to stdout and `log_file_path` (created if absent, appended otherwise).
/// ANSI is off so the file stays plain text. Level comes from `RUST_LOG`,
/// default `info`.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let log_file = Arc::new(
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file_path)?,
    );

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout.and(log_file))
        .event_format(
            tracing_subscriber::fmt::format()
                .with_timer(LocalTimer)
                .with_level(true)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
