use std::env;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for envars
///
/// Diagnostics go to stderr so stdout only carries data (tables, JSON,
/// shell exports). Sets up colored output with detection of:
/// - NO_COLOR / ENVARS_NO_COLOR (disables colors)
/// - FORCE_COLOR / ENVARS_FORCE_COLOR (forces colors)
/// - RUST_LOG environment variable for filtering
pub fn init_logging() {
    let use_ansi = should_use_colors();

    // Defaults to "info" if RUST_LOG is not set
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi)
                .with_target(false) // No module paths in CLI output
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .without_time()
                .compact(),
        )
        .with(env_filter)
        .init();
}

/// Determine if we should use ANSI colors based on environment variables
///
/// The NO_COLOR standard and its envars-specific override win over any
/// force flag.
fn should_use_colors() -> bool {
    // Check NO_COLOR standard first
    if env::var("NO_COLOR").is_ok() || env::var("ENVARS_NO_COLOR").is_ok() {
        return false;
    }

    // Check for force color
    if env::var("FORCE_COLOR").is_ok() || env::var("ENVARS_FORCE_COLOR").is_ok() {
        return true;
    }

    // tracing-subscriber handles TTY detection
    true
}
