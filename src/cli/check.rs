//! `check` command: validate `theme.toml`.

use anyhow::Result;
use std::path::Path;

use super::{Cli, load_config};
use crate::config::{ConfigDiagnostics, ConfigError, LoadedConfig};
use crate::log;

/// Validate the config file named on the command line.
pub fn run(cli: &Cli, strict: bool) -> Result<()> {
    let (path, loaded) = load_config(cli)?;
    let diag = check_loaded(&path, &loaded, strict)?;

    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!(
        "check";
        "{} is valid ({} warnings)",
        display_path,
        diag.warnings().len()
    );
    Ok(())
}

/// Report unknown fields, then validate every section.
pub fn check_loaded(
    path: &Path,
    loaded: &LoadedConfig,
    strict: bool,
) -> Result<ConfigDiagnostics, ConfigError> {
    report_unknown_fields(path, &loaded.unknown_fields, strict)?;
    let diag = loaded.config.check()?;
    diag.print_warnings();
    Ok(diag)
}

/// Warn about unknown fields, or fail when `strict`.
pub fn report_unknown_fields(
    path: &Path,
    unknown_fields: &[String],
    strict: bool,
) -> Result<(), ConfigError> {
    if unknown_fields.is_empty() {
        return Ok(());
    }
    if strict {
        return Err(ConfigError::UnknownFields(
            path.to_path_buf(),
            unknown_fields.to_vec(),
        ));
    }

    log!("warning"; "unknown fields in {}, ignoring:", path.display());
    for field in unknown_fields {
        eprintln!("- {field}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;

    fn loaded(unknown: &[&str]) -> LoadedConfig {
        LoadedConfig {
            config: ThemeConfig::turbocore(),
            unknown_fields: unknown.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[test]
    fn test_clean_config_passes() {
        assert!(check_loaded(Path::new("theme.toml"), &loaded(&[]), true).is_ok());
    }

    #[test]
    fn test_unknown_fields_warn_by_default() {
        assert!(check_loaded(Path::new("theme.toml"), &loaded(&["navbar"]), false).is_ok());
    }

    #[test]
    fn test_unknown_fields_fail_when_strict() {
        let err = check_loaded(Path::new("theme.toml"), &loaded(&["navbar"]), true).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFields(_, ref f) if f == &["navbar"]));
    }

    #[test]
    fn test_invalid_config_fails() {
        let mut config = loaded(&[]);
        config.config.appearance.primary_hue = Some(360);
        let err = check_loaded(Path::new("theme.toml"), &config, false).unwrap_err();
        assert!(err.to_string().contains("appearance.primary_hue"));
    }
}
