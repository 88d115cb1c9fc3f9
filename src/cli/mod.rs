//! Command-line interface for yaml2env
//!
//! Takes an ordered list of YAML files or directories; later sources
//! overwrite earlier ones when a top-level key collides.

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_merged;
use crate::render::write_flattened;
use crate::scan::collect_inputs;

/// Flatten YAML configuration trees into KEY=VALUE lines
#[derive(Parser)]
#[command(name = "yaml2env")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML files or directories to load; later paths overwrite earlier ones
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    // Validated here rather than via a clap `required` arg: a missing
    // required positional would exit with clap's status 2, and callers
    // expect status 1 with a usage line.
    if cli.paths.is_empty() {
        let usage = Cli::command().render_usage().to_string();
        bail!("no input paths given\n\n{usage}");
    }

    let files = collect_inputs(&cli.paths)?;
    let merged = load_merged(&files)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_flattened(&merged, &mut out)?;

    Ok(())
}
