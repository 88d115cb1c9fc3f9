//! yaml2env: Flatten YAML configuration trees into KEY=VALUE lines
//!
//! This tool loads YAML files from the given paths, merges their top-level
//! keys into a single mapping, and prints one flattened `KEY=VALUE` line per
//! leaf for consumption by shells and CI environments.

use anyhow::Result;

mod cli;
mod config;
mod render;
mod scan;

fn main() -> Result<()> {
    cli::run()
}
