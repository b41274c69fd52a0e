//! Logging initialization: human-readable lines (timestamp, level, target, message, fields)
//! teed to the console and a plain-text log file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Filter used when `RUST_LOG` is unset.
///
/// The bot's own crates log at `info`. The gateway stack (serenity, its websocket and HTTP
/// clients) logs every heartbeat and request at `info`/`debug`, and sqlx logs every statement
/// at `info`; those are capped at `warn`.
pub const DEFAULT_LOG_FILTER: &str = "info,\
order_bot=info,storage=info,\
serenity=warn,tungstenite=warn,tokio_tungstenite=warn,reqwest=warn,hyper=warn,\
sqlx=warn,\
tracing::span=warn";

/// Local time in `YYYY-MM-DD HH:MM:SS` for human-readable log lines.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let t = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{} ", t)
    }
}

/// `RUST_LOG` if set and valid, else [`DEFAULT_LOG_FILTER`].
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Creates the directory holding `log_file_path` (e.g. `logs/` for the default `LOG_FILE`).
pub fn ensure_log_dir(log_file_path: &str) -> io::Result<()> {
    match Path::new(log_file_path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

/// Initializes the global tracing subscriber.
///
/// Output is teed to stdout and `log_file_path` (its directory is created if missing) without
/// ANSI codes. Load `.env` before calling so `RUST_LOG` is honoured.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    ensure_log_dir(log_file_path)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    let file = Arc::new(file);

    use tracing_subscriber::fmt::writer::MakeWriterExt;
    let writer = io::stdout.and(file);

    let event_format = tracing_subscriber::fmt::format()
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .event_format(event_format)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(log_filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
