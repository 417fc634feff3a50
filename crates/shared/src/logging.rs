use std::{env, str::FromStr};

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global tracing subscriber. The filter comes from `RUST_LOG`
/// (default `info`); `LOG_FORMAT=json` switches to structured JSON output.
pub fn configure_logging() -> Result<(), anyhow::Error> {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_str(&filter)?)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stdout);

    let result = if env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        warn!("logging subscriber was not installed, it may already be initialized: {e}");
    }

    Ok(())
}
