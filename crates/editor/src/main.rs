// Chunk: docs/chunks/console_frontend - Line-oriented frontend
//!
//! notepad: open files in tabs, edit them line by line, save them.
//!
//! Reads commands from stdin and writes the tab strip and prompts to stdout.
//! Logs go to stderr.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use notepad::config::{config_file_path, Config};
use notepad::console::Console;
use notepad::dialogs::TerminalDialogs;
use notepad::{logging, Notepad};

#[derive(Debug, Parser)]
#[command(name = "notepad", version, about = "A tabbed plain-text notepad")]
struct Args {
    /// Files to open, one tab each
    files: Vec<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(config_file_path);
    let config = Config::load(args.config.as_deref())
        .with_context(|| format!("failed to load config from {config_path:?}"))?;

    logging::init(&config.log_filter);
    info!(files = args.files.len(), "starting notepad");

    let stdin = io::stdin();
    let terminal = TerminalDialogs::new(stdin.lock(), io::stdout());
    let mut console = Console::new(Notepad::new(&config), terminal);
    console.use_native_dialogs(config.native_dialogs);
    console.open_files(&args.files);

    console.run().context("console I/O failed")?;
    info!("exiting");
    Ok(())
}
