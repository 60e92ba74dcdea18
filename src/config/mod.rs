//! Theme configuration management for `theme.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── appearance # [appearance]
//! │   ├── brand      # [brand]
//! │   ├── footer     # [footer]
//! │   ├── project    # [project]
//! │   └── seo        # [seo]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ThemeConfig (this file)
//! ```
//!
//! `ThemeConfig` is the raw, unvalidated file contents. It becomes a
//! [`ThemeConfiguration`](crate::theme::ThemeConfiguration) once validated.

pub mod section;
pub mod types;
mod util;

pub use section::{AppearanceConfig, BrandConfig, FooterConfig, ProjectConfig, SeoConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::{debug, theme::Markup};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "theme.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing theme.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Header branding (logo)
    #[serde(default)]
    pub brand: BrandConfig,

    /// Project link
    #[serde(default)]
    pub project: ProjectConfig,

    /// Title template and description
    #[serde(default)]
    pub seo: SeoConfig,

    /// Dark mode and primary hue
    #[serde(default)]
    pub appearance: AppearanceConfig,

    /// Footer text template
    #[serde(default)]
    pub footer: FooterConfig,
}

/// Result of loading a config file.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: ThemeConfig,
    /// Keys present in the file but not understood (dotted paths).
    pub unknown_fields: Vec<String>,
}

impl ThemeConfig {
    /// The TurboCore documentation theme.
    pub fn turbocore() -> Self {
        Self {
            brand: BrandConfig {
                logo: Markup::element("h1", vec!["TurboCore Docs".into()]),
            },
            project: ProjectConfig {
                link: Some("https://blog.samiyousef.ca".into()),
            },
            seo: SeoConfig {
                title_template: "%s - TurboCore".into(),
                description: "API documentation for TurboCore".into(),
            },
            appearance: AppearanceConfig {
                dark_mode: Some(true),
                primary_hue: Some(212),
            },
            footer: FooterConfig {
                text: Markup::element("span", vec!["{year} © TurboCore.".into()]),
            },
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, unknown_fields) = Self::parse_with_ignored(&content)?;
        debug!("config"; "loaded {} ({} unknown fields)", path.display(), unknown_fields.len());

        Ok(LoadedConfig {
            config,
            unknown_fields,
        })
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate every section.
    ///
    /// Collects all problems instead of stopping at the first one.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.brand.validate(diag);
        self.project.validate(diag);
        self.seo.validate(diag);
        self.appearance.validate(diag);
        self.footer.validate(diag);
    }

    /// Validate and convert the collected diagnostics into a result.
    ///
    /// Errors are returned as `Err`, warnings are left in the `Ok` value for
    /// the caller to report.
    pub fn check(&self) -> Result<ConfigDiagnostics, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.validate(&mut diag);
        if diag.has_errors() {
            return Err(ConfigError::Diagnostics(diag));
        }
        Ok(diag)
    }

    /// Commented TOML template listing every section.
    pub fn template() -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "# Documentation theme configuration (docs-theme v{})\n\n",
            env!("CARGO_PKG_VERSION")
        ));

        for section in [
            BrandConfig::template_with_header(),
            ProjectConfig::template_with_header(),
            SeoConfig::template_with_header(),
            AppearanceConfig::template_with_header(),
            FooterConfig::template_with_header(),
        ] {
            out.push_str(&section);
            out.push('\n');
        }

        out
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TURBOCORE_TOML: &str = r#"
[brand]
logo = { tag = "h1", children = ["TurboCore Docs"] }

[project]
link = "https://blog.samiyousef.ca"

[seo]
title_template = "%s - TurboCore"
description = "API documentation for TurboCore"

[appearance]
dark_mode = true
primary_hue = 212

[footer]
text = { tag = "span", children = ["{year} © TurboCore."] }
"#;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = ThemeConfig::from_str("[brand\nlogo = \"x\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_parse_turbocore() {
        let config = ThemeConfig::from_str(TURBOCORE_TOML).unwrap();
        assert_eq!(config, ThemeConfig::turbocore());
    }

    #[test]
    fn test_turbocore_is_valid() {
        let diag = ThemeConfig::turbocore().check().unwrap();
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ThemeConfig::turbocore();
        let toml = config.to_toml().unwrap();
        assert_eq!(ThemeConfig::from_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_empty_config_reports_every_required_field() {
        let config = ThemeConfig::from_str("").unwrap();
        let Err(ConfigError::Diagnostics(diag)) = config.check() else {
            panic!("empty config must be rejected");
        };

        for field in [
            BrandConfig::FIELDS.logo,
            ProjectConfig::FIELDS.link,
            SeoConfig::FIELDS.title_template,
            SeoConfig::FIELDS.description,
            AppearanceConfig::FIELDS.dark_mode,
            AppearanceConfig::FIELDS.primary_hue,
            FooterConfig::FIELDS.text,
        ] {
            assert!(diag.has_error_for(field), "missing error for {}", field.as_str());
        }
    }

    #[test]
    fn test_missing_single_field_rejected() {
        let content = TURBOCORE_TOML.replace("primary_hue = 212\n", "");
        let config = ThemeConfig::from_str(&content).unwrap();
        let Err(ConfigError::Diagnostics(diag)) = config.check() else {
            panic!("missing hue must be rejected");
        };
        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_for(AppearanceConfig::FIELDS.primary_hue));
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(AppearanceConfig::FIELDS.primary_hue.as_str(), "appearance.primary_hue");
        assert_eq!(ProjectConfig::FIELDS.link.as_str(), "project.link");
        assert_eq!(FooterConfig::FIELDS.text.as_str(), "footer.text");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = format!("{TURBOCORE_TOML}\n[navbar]\nitems = 3\n");
        let (config, ignored) = ThemeConfig::parse_with_ignored(&content).unwrap();

        assert_eq!(config, ThemeConfig::turbocore());
        assert!(ignored.iter().any(|f| f.contains("navbar")));
    }

    #[test]
    fn test_misspelled_logo_key_rejected() {
        let content = TURBOCORE_TOML.replace(
            r#"logo = { tag = "h1", children = ["TurboCore Docs"] }"#,
            r#"logo = { tag = "img", atrs = { src = "/logo.svg" } }"#,
        );
        let Err(ConfigError::Toml(err)) = ThemeConfig::parse_with_ignored(&content) else {
            panic!("misspelled logo key must be rejected");
        };
        assert!(err.to_string().contains("unknown field `atrs`"), "{err}");
    }

    #[test]
    fn test_misspelled_footer_key_rejected() {
        let content = TURBOCORE_TOML.replace(
            r#"text = { tag = "span", children = ["{year} © TurboCore."] }"#,
            r#"text = { tag = "span", children = ["{year} © TurboCore."], class = "muted" }"#,
        );
        let Err(ConfigError::Toml(err)) = ThemeConfig::from_str(&content) else {
            panic!("misspelled footer key must be rejected");
        };
        assert!(err.to_string().contains("unknown field `class`"), "{err}");

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, &content).unwrap();
        assert!(matches!(ThemeConfig::from_path(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = ThemeConfig::parse_with_ignored(TURBOCORE_TOML).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, TURBOCORE_TOML).unwrap();

        let loaded = ThemeConfig::from_path(&path).unwrap();
        assert_eq!(loaded.config, ThemeConfig::turbocore());
        assert!(loaded.unknown_fields.is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = ThemeConfig::from_path(&dir.path().join(CONFIG_FILE));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_template_parses() {
        let template = ThemeConfig::template();
        for header in ["[brand]", "[project]", "[seo]", "[appearance]", "[footer]"] {
            assert!(template.contains(header), "template missing {header}");
        }
        let (_, ignored) = ThemeConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty());
    }
}
