#[cfg(not(debug_assertions))]
use human_panic::setup_panic;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LEVEL: &str = "info";

/// Builds the log filter from `RUST_LOG`; the second value is `true` when it
/// fell back to `DEFAULT_LEVEL`.
fn env_filter() -> (EnvFilter, bool) {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new(DEFAULT_LEVEL), true),
    }
}

/// Installs the compact `tracing` subscriber as the global default.
pub fn install_logger() -> Result<(), SetGlobalDefaultError> {
    let (filter, fell_back) = env_filter();
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if fell_back {
        tracing::info!(level = DEFAULT_LEVEL, "RUST_LOG not set, using default log level");
    }
    Ok(())
}

/// Panic reporting plus logging; call once at the top of `main`.
///
/// Release builds print a short crash report; debug builds print a full
/// backtrace with the newest frame last.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    #[cfg(not(debug_assertions))]
    setup_panic!();

    #[cfg(debug_assertions)]
    better_panic::Settings::debug()
        .most_recent_first(false)
        .lineno_suffix(true)
        .install();

    install_logger()
}
