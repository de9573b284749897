use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "cnapp_dash=info";

/// Keeps the background writer alive; drop it last.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Install the file logger. The terminal belongs to the TUI, so nothing is
/// written to stdout/stderr. Returns `None`, and the app runs without logging,
/// when the log directory cannot be created.
pub fn init(filter: Option<&str>) -> Option<LoggingGuard> {
    let log_dir = crate::config::log_dir()?;
    init_in(&log_dir, filter)
}

pub fn init_in(log_dir: &Path, filter: Option<&str>) -> Option<LoggingGuard> {
    std::fs::create_dir_all(log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "cnapp-dash.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter.unwrap_or(DEFAULT_FILTER)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    // Log the panic, then let the previous hook report it.
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
