/*
 * Logging Module
 *
 * Installs env_logger behind the log facade. RUST_LOG overrides the
 * default filter.
 */

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger at info level.
pub fn init() {
    let env = Env::default().default_filter_or(LevelFilter::Info.to_string());
    let mut builder = Builder::from_env(env);

    // Only fails when a logger is already installed, which tests do freely.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_can_run_more_than_once() {
        init();
        init();
        log::info!("logger installed");
        assert!(log::max_level() >= LevelFilter::Error);
    }
}
