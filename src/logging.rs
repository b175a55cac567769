//! Diagnostic logging setup

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let config = ConfigBuilder::new()
        .add_filter_allow_str("gos")
        .build();

    // Fails only when a logger is already installed
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).ok();
}
