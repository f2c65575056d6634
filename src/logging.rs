//! Logger setup for the simulator binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger for the library and `decoy-sim`.
///
/// Verbose mode enables the per-tick reports and target decisions logged at
/// debug level. Otherwise only spawns, arming and recovered steering
/// problems are shown. `RUST_LOG` takes precedence over both.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None).format_target(verbose);

    // A second call finds the logger already set; tests rely on that being
    // harmless.
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised; keeping the existing one");
    }
}

fn filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!("warn,decoy_steering={level},decoy_sim={level}")
}
