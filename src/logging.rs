use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "TICKETDESK_LOG";

/// Initialize tracing.
///
/// - `verbose`: debug-level logs on stderr.
/// - otherwise: logging is disabled unless `TICKETDESK_LOG` names a file,
///   so command output stays clean. The file gets a `.{pid}` suffix to keep
///   concurrent invocations apart.
pub fn init_tracing(verbose: bool) {
    if verbose {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init();
        return;
    }

    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
        return;
    };

    let unique_path = format!("{}.{}", log_path, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
