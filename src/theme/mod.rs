//! Validated theme configuration handed to the host renderer.
//!
//! | Module   | Purpose                                         |
//! |----------|-------------------------------------------------|
//! | `clock`  | Injected time source for the footer year        |
//! | `footer` | Footer block and `{year}` evaluation            |
//! | `hue`    | Palette hue in `[0, 360)`                       |
//! | `markup` | Logo/footer fragments and their HTML rendering  |
//! | `seo`    | Title template, description, metadata provider  |
//!
//! A [`ThemeConfiguration`] is built once per generation run and never
//! mutated. Construction validates every field and fails with a diagnostic
//! per offending field.

pub mod clock;
pub mod footer;
pub mod hue;
pub mod markup;
pub mod seo;

pub use clock::{Clock, FixedClock, SystemClock};
pub use footer::{Footer, YEAR_PLACEHOLDER};
pub use hue::{HueRangeError, PrimaryHue};
pub use markup::{Element, Markup};
pub use seo::{SeoMetadata, SeoMetadataProvider, StaticSeoProvider, TITLE_PLACEHOLDER};

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::config::{ConfigDiagnostics, ConfigError, ThemeConfig};

/// Branding, SEO, palette and footer inputs for the host renderer.
#[derive(Clone)]
pub struct ThemeConfiguration {
    logo: Markup,
    project_link: Url,
    seo: Arc<dyn SeoMetadataProvider>,
    dark_mode: bool,
    primary_hue: PrimaryHue,
    footer: Footer,
    diagnostics: ConfigDiagnostics,
}

impl ThemeConfiguration {
    /// The TurboCore documentation theme, footer evaluated against `clock`.
    pub fn turbocore(clock: &dyn Clock) -> Result<Self, ConfigError> {
        Self::from_config(&ThemeConfig::turbocore(), clock)
    }

    /// Validate `config` and build the configuration.
    ///
    /// The footer's `{year}` is read from `clock` exactly once, here.
    /// Nothing is printed: warnings are kept and exposed by [`Self::diagnostics`].
    pub fn from_config(config: &ThemeConfig, clock: &dyn Clock) -> Result<Self, ConfigError> {
        let diagnostics = config.check()?;

        // Validation passed, so these only fail if validation and parsing drift apart.
        let project_link = config
            .project
            .parsed_link()
            .ok_or_else(|| ConfigError::Validation("project.link did not parse".into()))?;
        let primary_hue = config
            .appearance
            .hue()
            .ok_or_else(|| ConfigError::Validation("appearance.primary_hue out of range".into()))?;
        let dark_mode = config
            .appearance
            .dark_mode
            .ok_or_else(|| ConfigError::Validation("appearance.dark_mode is missing".into()))?;

        Ok(Self {
            logo: config.brand.logo.clone(),
            project_link,
            seo: Arc::new(StaticSeoProvider::new(config.seo.metadata())),
            dark_mode,
            primary_hue,
            footer: Footer::evaluate(&config.footer.text, clock),
            diagnostics,
        })
    }

    /// Replace the metadata provider.
    ///
    /// The provider must be pure and infallible, like the static one.
    pub fn with_seo_provider(mut self, provider: impl SeoMetadataProvider + 'static) -> Self {
        self.seo = Arc::new(provider);
        self
    }

    pub fn logo(&self) -> &Markup {
        &self.logo
    }

    pub fn project_link(&self) -> &Url {
        &self.project_link
    }

    /// Fresh metadata from the provider.
    pub fn seo_metadata(&self) -> SeoMetadata {
        self.seo.metadata()
    }

    /// Browser title for a page, built from the title template.
    pub fn compose_title(&self, page_title: &str) -> String {
        self.seo_metadata().compose_title(page_title)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn primary_hue(&self) -> PrimaryHue {
        self.primary_hue
    }

    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    /// Warnings raised while validating the source config.
    pub fn diagnostics(&self) -> &ConfigDiagnostics {
        &self.diagnostics
    }
}

impl fmt::Debug for ThemeConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeConfiguration")
            .field("logo", &self.logo)
            .field("project_link", &self.project_link.as_str())
            .field("seo", &self.seo_metadata())
            .field("dark_mode", &self.dark_mode)
            .field("primary_hue", &self.primary_hue)
            .field("footer", &self.footer)
            .finish()
    }
}

/// Field-for-field equality, comparing the provider by its output.
///
/// Diagnostics are not compared.
impl PartialEq for ThemeConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.logo == other.logo
            && self.project_link == other.project_link
            && self.seo_metadata() == other.seo_metadata()
            && self.dark_mode == other.dark_mode
            && self.primary_hue == other.primary_hue
            && self.footer == other.footer
    }
}

// ============================================================================
// tests
// ============================================================================
