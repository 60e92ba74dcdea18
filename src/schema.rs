//! Host renderer theming schema.
//!
//! The host renderer expects the theme under its own field names:
//!
//! | Host field               | Theme field                    |
//! |--------------------------|--------------------------------|
//! | `logo`                   | `logo`                         |
//! | `project.link`           | `project_link`                 |
//! | `useNextSeoProps`        | `seo_metadata()`               |
//! | `darkMode`               | `dark_mode`                    |
//! | `primaryHue`             | `primary_hue`                  |
//! | `footer.text`            | `footer.text` (evaluated)      |
//!
//! Markup fragments keep their structured form (string or
//! `{ tag, attrs, children }`).
//!
//! `project.link` is exported in normalized form, so a bare host gains a
//! trailing slash (`https://blog.samiyousef.ca` becomes
//! `https://blog.samiyousef.ca/`). Reading it back yields an equal theme,
//! and the raw link string compares equal once parsed as a `Url`.

use serde::{Deserialize, Serialize};

use crate::config::{
    AppearanceConfig, BrandConfig, ConfigError, FooterConfig, ProjectConfig, SeoConfig,
    ThemeConfig,
};
use crate::theme::{Markup, SeoMetadata, ThemeConfiguration};

/// Theme as laid out by the host renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HostTheme {
    pub logo: Markup,
    pub project: HostProject,
    pub use_next_seo_props: SeoMetadata,
    pub dark_mode: bool,
    pub primary_hue: i64,
    pub footer: HostFooter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostProject {
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostFooter {
    pub text: Markup,
}

impl HostTheme {
    /// Map a built theme onto the host schema.
    ///
    /// SEO metadata is sampled once from the provider.
    pub fn from_theme(theme: &ThemeConfiguration) -> Self {
        Self {
            logo: theme.logo().clone(),
            project: HostProject {
                link: theme.project_link().to_string(),
            },
            use_next_seo_props: theme.seo_metadata(),
            dark_mode: theme.dark_mode(),
            primary_hue: i64::from(theme.primary_hue().degrees()),
            footer: HostFooter {
                text: theme.footer().text.clone(),
            },
        }
    }

    /// Read back into a raw config.
    ///
    /// The footer text is already evaluated, so building the result yields
    /// the same footer regardless of the clock unless it still carries
    /// `{year}`.
    pub fn into_config(self) -> ThemeConfig {
        ThemeConfig {
            brand: BrandConfig { logo: self.logo },
            project: ProjectConfig {
                link: Some(self.project.link),
            },
            seo: SeoConfig {
                title_template: self.use_next_seo_props.title_template,
                description: self.use_next_seo_props.description,
            },
            appearance: AppearanceConfig {
                dark_mode: Some(self.dark_mode),
                primary_hue: Some(self.primary_hue),
            },
            footer: FooterConfig {
                text: self.footer.text,
            },
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}
