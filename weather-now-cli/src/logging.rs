//! Diagnostics go to stderr so stdout carries nothing but the report.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LEVEL: &str = "warn";

/// Map user-facing level names onto filter directives, falling back to
/// [`DEFAULT_LEVEL`] for anything unrecognised.
fn normalize_level(log_level: &str) -> &'static str {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => DEFAULT_LEVEL,
    }
}

pub fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::new(normalize_level(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
