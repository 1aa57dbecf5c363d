//! Logging setup

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` overrides the level chosen here. Calling this more than once
/// is harmless.
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
