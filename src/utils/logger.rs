use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs a global `tracing` subscriber printing to stdout
///
/// The level is read from the `LOGLEVEL` environment variable
/// (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`) and defaults to `INFO`.
/// Safe to call more than once; only the first call has an effect.
///
/// The library never calls this itself.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level_from_env();
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("A global tracing subscriber is already installed");
        }
    });
}

fn log_level_from_env() -> Level {
    let raw = env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string());
    parse_level(&raw)
}

fn parse_level(raw: &str) -> Level {
    match raw.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}
