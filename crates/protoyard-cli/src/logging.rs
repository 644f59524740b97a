use crate::args::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG`, when set, wins over
/// `--log-level`. Logs go to stderr so stdout stays machine-readable.
pub fn init(level: LogLevel, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
