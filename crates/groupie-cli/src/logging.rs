//! stderr logging for the CLI.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. `GROUPIE_LOG` takes precedence over
/// `--verbose`; without either only warnings are shown.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env("GROUPIE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
