use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for TUI mode.
pub const LOG_PATH_ENV: &str = "GREETING_PANEL_LOG";

/// Initialize tracing for the terminal UI.
///
/// Logging is disabled by default so log lines never land on the drawn screen.
/// Set `GREETING_PANEL_LOG` to a file path to enable it. The file name gets a
/// `.{timestamp}.{pid}` suffix so concurrent instances don't share a file.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_ENV).ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter_or("info"))
        .with(file_layer)
        .init();
}

/// Initialize tracing for headless runs: stderr only, so stdout carries
/// nothing but the rendered view.
pub fn init_headless_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or("warn"))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
