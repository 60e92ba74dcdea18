//! `init` command: write a starting `theme.toml`.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::ThemeConfig;
use crate::log;

/// Content for a new config file.
pub fn generate_config(template: bool) -> Result<String> {
    if template {
        return Ok(ThemeConfig::template());
    }

    let body = ThemeConfig::turbocore()
        .to_toml()
        .context("Failed to serialize theme config")?;
    Ok(format!(
        "# Documentation theme configuration (docs-theme v{})\n\
         # `{{year}}` in footer text expands to the current year.\n\n{body}",
        env!("CARGO_PKG_VERSION")
    ))
}

/// Write the config file, refusing to overwrite unless `force`.
pub fn write_config(path: &Path, force: bool, template: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }

    let content = generate_config(template)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{FixedClock, ThemeConfiguration};
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("theme.toml");
        write_config(&path, false, false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[appearance]"));

        let (config, ignored) = ThemeConfig::parse_with_ignored(&content).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(config, ThemeConfig::turbocore());
        assert!(ThemeConfiguration::from_config(&config, &FixedClock(2025)).is_ok());
    }

    #[test]
    fn test_existing_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("theme.toml");
        fs::write(&path, "custom content").unwrap();

        assert!(write_config(&path, false, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom content");

        write_config(&path, true, false).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "custom content");
    }

    #[test]
    fn test_template_is_rejected_until_filled() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docs/theme.toml");
        write_config(&path, false, true).unwrap();

        let config = ThemeConfig::from_path(&path).unwrap().config;
        assert!(config.check().is_err());
    }
}
