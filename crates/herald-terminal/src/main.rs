//! Herald terminal entry point.
//! Uses bpaf for CLI parsing and runs the feed shell fullscreen.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use bpaf::{Args, Parser};
use herald_app::{FeedConfig, Rgb};
use herald_terminal::cli::{herald_parser, HeraldArgs};
use herald_terminal::demo::demo_config;
use herald_terminal::tui::theme::Theme;
use tracing_subscriber::EnvFilter;

/// Print a friendly usage message when parsing fails
fn print_usage() {
    eprintln!(
        "usage: herald [-c CONFIG] [-a HEX] [--chrome|--no-chrome] [--log PATH]

keys inside the feed:
    i       focus the reply bar (slides the keyboard in)
    Esc     dismiss the keyboard
    Enter   send a reply, or advance the scripted feed
    j/k     scroll newer/older
    o/c     fade the feed in or out
    b       bounce the author badge
    r       reset and replay the script
    q       quit

run 'herald --help' for option details"
    );
}

/// Log writer that appends to the session log file.
///
/// The TUI owns stdout, so log lines must go elsewhere.
struct FileLogWriter {
    file: Arc<File>,
}

impl io::Write for FileLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self.file).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self.file).flush()
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let make_writer = {
        let file = Arc::new(file);
        move || FileLogWriter {
            file: Arc::clone(&file),
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(make_writer)
        .try_init();
    Ok(())
}

fn load_config(args: &HeraldArgs) -> Result<FeedConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            FeedConfig::from_toml_str(&raw)?
        }
        None => demo_config(),
    };
    if let Some(chrome) = args.chrome {
        config.has_chrome = chrome;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: HeraldArgs = match herald_parser().to_options().run_inner(Args::current_args()) {
        Ok(args) => args,
        Err(failure) => {
            // Help requests exit cleanly with bpaf's own output
            let exit_code = failure.clone().exit_code();
            if exit_code == 0 {
                print!("{:?}", failure);
                std::process::exit(0);
            }
            print_usage();
            std::process::exit(1);
        }
    };

    let log_path = args.log.clone().unwrap_or_else(|| PathBuf::from("herald.log"));
    init_logging(&log_path)?;

    let config = load_config(&args)?;
    let accent = args
        .accent
        .as_deref()
        .map(Rgb::from_hex)
        .unwrap_or(Theme::ACCENT);
    tracing::info!(%accent, chrome = config.has_chrome, "starting feed shell");

    herald_terminal::tui::run(config, accent).await
}
