use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up the logging configuration for the application.
///
/// Two layers are installed: one writing to stderr, so it never mixes with
/// the console's own output on stdout, and one writing to a daily rotating
/// file in the `logs/` directory.
///
/// Log levels are controlled by the `RUST_LOG` environment variable.
/// If `RUST_LOG` is not set, it defaults to `info` for all crates,
/// and `debug` for the `heroes_*` crates.
pub fn setup_logging() {
    // File appender for daily log rotation
    let file_appender = tracing_appender::rolling::daily("logs", "heroes.log");
    let (non_blocking_file, _guard_file) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_thread_ids(true)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let default_filter = "info,heroes=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The file writer stops once the guard is dropped.
    std::mem::forget(_guard_file);
}
