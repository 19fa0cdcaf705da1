//! Logging setup using the `log` facade and `env_logger`.
//!
//! `RUST_LOG` takes precedence when set. Otherwise the level comes from the
//! CLI: `--quiet` shows errors only, the default shows warnings, and each
//! `-v` raises it one step (info, debug, trace).
//!
//! Logging is diagnostic only. The moved-file summary and per-file move
//! errors are printed regardless of the level.

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Initialize logging; call once, before anything logs
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    builder.format(|buf, record| {
        let level = record.level();
        let level_style = buf.default_level_style(level);
        writeln!(
            buf,
            "{level_style}{:<5}{level_style:#} {}",
            level,
            record.args()
        )
    });

    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();
}

/// Map CLI flags to a level filter
pub fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
