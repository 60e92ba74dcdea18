//! `[project]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [project]
//! link = "https://github.com/turbocore/turbocore"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ConfigDiagnostics;

const URL_HINT: &str = "use format like https://github.com/owner/repo";

/// External link associated with the project (repository or related site).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "project")]
pub struct ProjectConfig {
    /// Absolute http(s) URL shown as the project link.
    pub link: Option<String>,
}

impl ProjectConfig {
    /// Validate project configuration.
    ///
    /// # Checks
    /// - `link` is set and not blank
    /// - `link` parses as an absolute URL (relative paths are rejected)
    /// - scheme is http or https and a host is present
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let link = match self.link.as_deref().map(str::trim) {
            Some(link) if !link.is_empty() => link,
            _ => {
                diag.error_with_hint(
                    Self::FIELDS.link,
                    "project link is required",
                    format!("set {}, e.g.: \"https://github.com/owner/repo\"", Self::FIELDS.link),
                );
                return;
            }
        };

        match Url::parse(link) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.link,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        URL_HINT,
                    );
                } else if parsed.host_str().is_none_or(str::is_empty) {
                    diag.error_with_hint(Self::FIELDS.link, "URL must have a valid host", URL_HINT);
                } else if parsed.scheme() == "http" {
                    diag.warn(Self::FIELDS.link, "link uses plain http");
                }
            }
            Err(e) => {
                diag.error_with_hint(Self::FIELDS.link, format!("invalid URL: {e}"), URL_HINT);
            }
        }
    }

    /// Parsed link, `None` when missing or malformed.
    pub fn parsed_link(&self) -> Option<Url> {
        self.link.as_deref().and_then(|s| Url::parse(s.trim()).ok())
    }
}
