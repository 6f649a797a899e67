mod cli;
mod input;

use anyhow::{Result, bail};
use clap::Parser as _;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{cli::Args, input::RawOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let command = input::parse(&RawOptions::from(args));
    debug!(?command, "resolved command");

    if !command.is_valid() {
        bail!("nothing to do: pass --add <TEXT>, --list or --delete <ID>");
    }

    // Hand-off point for the note store.
    println!("{command}");

    Ok(())
}
