//! Command-line interface module.

mod args;
pub mod check;
pub mod export;
pub mod init;
pub mod title;

pub use args::{Cli, Commands};

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::config::{LoadedConfig, ThemeConfig, find_config_file};
use crate::debug;

/// Resolve the config path for commands that read it.
///
/// Searches upward from `cwd`; falls back to `cwd/<config>` so the
/// not-found error names a concrete path.
pub fn resolve_config_path(cwd: &Path, config: &Path) -> (PathBuf, bool) {
    match find_config_file(cwd, config) {
        Some(path) => (path, true),
        None => (cwd.join(config), false),
    }
}

/// Locate and parse the config file.
pub fn load_config(cli: &Cli) -> Result<(PathBuf, LoadedConfig)> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (path, exists) = resolve_config_path(&cwd, &cli.config);

    if !exists {
        bail!(
            "config file '{}' not found. Run 'docs-theme init' to create one.",
            cli.config.display()
        );
    }

    debug!("config"; "using {}", path.display());
    let loaded = ThemeConfig::from_path(&path)?;
    Ok((path, loaded))
}
