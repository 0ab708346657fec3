//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// The filter comes from `WORKOUT_METRICS_LOG`, then `RUST_LOG`, then the
/// configured level. Logs go to stderr so stdout carries only the report.
pub fn init(configured_level: &str) {
    let log_env = std::env::var("WORKOUT_METRICS_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| configured_level.to_string());
    let env_filter = EnvFilter::try_new(&log_env).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!(%log_env, "log filter");
}
