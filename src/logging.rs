use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file prefix.
pub const LOG_ENV_VAR: &str = "MANGAGEN_LOG";

/// Initialize tracing with optional file output.
///
/// The TUI owns stdout, so nothing is logged unless `MANGAGEN_LOG` points at
/// a file path. Each run writes to `{path}.{timestamp}.{pid}` so concurrent
/// instances never share a file.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let Ok(file) = std::fs::File::create(unique_log_path(&log_path)) else {
        eprintln!("Warning: Failed to create log file from {}", log_path);
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

pub fn unique_log_path(prefix: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", prefix, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_carries_prefix_and_pid() {
        let path = unique_log_path("/tmp/mangagen.log");
        assert!(path.starts_with("/tmp/mangagen.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
