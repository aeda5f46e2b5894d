//! # Command Line Interface
//!
//! bpaf parser for the `herald` binary. Everything is optional; with no
//! arguments the shell runs the scripted demo feed.

use bpaf::{construct, long, Parser};
use std::path::PathBuf;

/// Parsed command line options.
#[derive(Debug, Clone)]
pub struct HeraldArgs {
    /// Feed configuration file (TOML).
    pub config: Option<PathBuf>,
    /// Accent color override as a hex string.
    pub accent: Option<String>,
    /// Chrome override: `--chrome` forces it on, `--no-chrome` off,
    /// absent leaves the config value alone.
    pub chrome: Option<bool>,
    /// Log file path.
    pub log: Option<PathBuf>,
}

/// Build the argument parser for the `herald` binary.
pub fn herald_parser() -> impl Parser<HeraldArgs> {
    let config = long("config")
        .short('c')
        .help("Feed configuration file (TOML)")
        .argument::<PathBuf>("CONFIG")
        .optional();
    let accent = long("accent")
        .short('a')
        .help("Accent color as hex, e.g. E84A3D (malformed input falls back to black)")
        .argument::<String>("HEX")
        .optional();
    let chrome_on = long("chrome")
        .help("Treat the reply bar as keyboard chrome when computing the feed lift")
        .req_flag(true);
    let chrome_off = long("no-chrome")
        .help("Ignore bottom chrome even when the config enables it")
        .req_flag(false);
    let chrome = construct!([chrome_on, chrome_off]).optional();
    let log = long("log")
        .help("Log file path (default herald.log)")
        .argument::<PathBuf>("LOG")
        .optional();

    construct!(HeraldArgs {
        config,
        accent,
        chrome,
        log,
    })
}
