//! `[seo]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [seo]
//! title_template = "%s - TurboCore"
//! description = "API documentation for TurboCore"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::theme::{SeoMetadata, TITLE_PLACEHOLDER, seo::placeholder_count};

/// Search-engine and browser-tab metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "seo")]
pub struct SeoConfig {
    /// Page title pattern, `%s` is replaced by the page title.
    pub title_template: String,

    /// Default meta description for pages that do not set one.
    pub description: String,
}

impl SeoConfig {
    /// Validate seo configuration.
    ///
    /// # Checks
    /// - `title_template` contains exactly one `%s`
    /// - `description` is not blank
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let count = placeholder_count(&self.title_template);
        if count != 1 {
            diag.error_with_hint(
                Self::FIELDS.title_template,
                format!(
                    "must contain exactly one `{TITLE_PLACEHOLDER}` placeholder, found {count}"
                ),
                format!("e.g.: \"{TITLE_PLACEHOLDER} - My Project\""),
            );
        }

        if self.description.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.description,
                "description is required",
                format!("set {}, e.g.: \"API documentation for My Project\"", Self::FIELDS.description),
            );
        }
    }

    pub fn metadata(&self) -> SeoMetadata {
        SeoMetadata {
            title_template: self.title_template.clone(),
            description: self.description.clone(),
        }
    }
}
