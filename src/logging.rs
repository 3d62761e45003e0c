// 📝 Logging
// tracing-subscriber setup shared by the server binary.

use crate::config::{LogFormat, ServerConfig};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the configured level when set. Calling this twice is
/// harmless: the second install is ignored.
pub fn init(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let _ = match config.log_format {
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
        LogFormat::Pretty => builder.compact().try_init(),
    };
}

/// Our crate at `level`, HTTP plumbing one notch quieter.
fn default_filter(level: &str) -> String {
    format!("jakal={level},jakal_server={level},tower_http=warn")
}
