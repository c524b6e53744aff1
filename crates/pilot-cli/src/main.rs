//! Palette Pilot: command-line front end.
//!
//! Wraps the color engine and the palette library. Library state lives in a
//! directory of JSON files (`PALETTE_PILOT_DATA_DIR`, `--data-dir`).

mod commands;
mod config;
mod response_source;
mod run;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pilot_store::{FileStore, PaletteLibrary};

use crate::commands::Cli;
use crate::config::CliConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::default().with_data_dir(cli.data_dir);
    tracing::debug!("using data dir {}", config.data_dir.display());

    let mut library = PaletteLibrary::open(FileStore::new(&config.data_dir));
    let mut stdout = io::stdout().lock();
    run::execute(cli.command, &config, &mut library, &mut stdout)
}
