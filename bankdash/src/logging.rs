use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with file-based logging
/// Logs are written to ~/.config/bankdash/logs/bankdash-YYYY-MM-DD-HH-MM-SS.log
pub fn init_logging() -> Result<PathBuf> {
    let logs_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("bankdash")
        .join("logs");
    std::fs::create_dir_all(&logs_dir)?;

    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_filename = format!("bankdash-{}.log", timestamp);
    let log_path = logs_dir.join(&log_filename);

    // The terminal belongs to the UI, so everything goes to the file
    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // Set up filter (default to INFO, can be overridden with RUST_LOG env var)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    // Keep the guard alive for the lifetime of the program
    std::mem::forget(guard);

    Ok(log_path)
}
