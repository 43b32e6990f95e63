//! Logger set-up shared by the integration tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger for a test binary.
///
/// `RUST_LOG` takes precedence. Without it, `verbose` selects trace output
/// (every strafe-mode selection) over warnings only.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.is_test(true);

    // Several tests in one binary may call this; only the first wins.
    let _ = builder.try_init();
}
