//! Process logging initialization for the `wordfreq` binary.
//!
//! Logs go to the terminal; stdout is left alone so the summary line can be
//! piped.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Initialize the terminal logger at `level`.
pub fn initialize(level: LevelFilter) {
    let _ = TermLogger::init(level, build_config(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
