//! Process-wide tracing subscriber setup.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

static INIT: Once = Once::new();

const LOG_ENV: &str = "LOGLEVEL";
const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a `fmt` subscriber for the whole process.
///
/// The filter is read from the `LOGLEVEL` environment variable using
/// `EnvFilter` directive syntax, so both a bare level (`DEBUG`) and
/// per-target directives (`matchbook_rs=trace`) work. A missing or
/// unparsable value falls back to `info`.
/// Calling it more than once is a no-op, so binaries, benches and tests can
/// all call it freely.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter());
        let directives = filter.to_string();

        let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log filter set to: {}", directives);
        }
    });
}

pub(crate) fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_DIRECTIVE)
}
