//! Ordered walk of input paths with name-based file selection

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const YAML_SUFFIX: &str = ".yml";
const EXAMPLE_SUFFIX: &str = ".example.yml";

/// Collect the loadable YAML files under `paths`, in merge order.
///
/// Supplied paths are handled in argument order. Directories are walked
/// depth first in the order the filesystem enumerates entries; merge
/// precedence depends on this encounter order, so entries are not sorted.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        walk_path(path, &mut files)?;
    }
    Ok(files)
}

fn walk_path(path: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(path) {
        let entry = entry
            .with_context(|| format!("Failed reading input path: {}", path.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_config_file(entry.path()) {
            tracing::debug!("Selected {}", entry.path().display());
            files.push(entry.path().to_path_buf());
        } else {
            tracing::debug!("Skipping {}", entry.path().display());
        }
    }
    Ok(())
}

/// A loadable config file is named `*.yml` but not `*.example.yml`.
fn is_config_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    name.ends_with(YAML_SUFFIX) && !name.ends_with(EXAMPLE_SUFFIX)
}
