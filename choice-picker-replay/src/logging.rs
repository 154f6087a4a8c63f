//! Logger setup shared by the CLI entry points

use env_logger::{Builder, Target};
use log::LevelFilter;

const WORKSPACE_MODULES: [&str; 2] =
    ["choice_picker_core", "choice_picker_replay"];

/// Initialise `env_logger`. `RUST_LOG` wins when set; otherwise warnings
/// globally and `Info` (or `Trace` when `verbose`) for workspace crates.
pub fn init_logger(verbose: bool) {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        log::debug!("Initializing logger from env");
        return;
    }

    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    let mut builder = Builder::new();
    builder.target(Target::Stderr).filter_level(LevelFilter::Warn);
    for module in WORKSPACE_MODULES {
        builder.filter_module(module, level);
    }
    builder.init();
}
