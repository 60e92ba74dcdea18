//! `[appearance]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [appearance]
//! dark_mode = true
//! primary_hue = 212
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::theme::PrimaryHue;

/// Color scheme settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "appearance")]
pub struct AppearanceConfig {
    /// Offer a dark color scheme toggle.
    #[config(default = "true")]
    pub dark_mode: Option<bool>,

    /// Base hue of the generated palette, degrees in [0, 360).
    ///
    /// Read as a signed integer so out-of-range values are reported
    /// with the field name instead of a parse error.
    #[config(default = "212")]
    pub primary_hue: Option<i64>,
}

impl AppearanceConfig {
    /// Validate appearance configuration.
    ///
    /// Both fields are required, `primary_hue` must be in [0, 360).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.dark_mode.is_none() {
            diag.error_with_hint(
                Self::FIELDS.dark_mode,
                "dark_mode is required",
                format!("set {} = true or false", Self::FIELDS.dark_mode),
            );
        }

        match self.primary_hue.map(PrimaryHue::try_from) {
            None => diag.error_with_hint(
                Self::FIELDS.primary_hue,
                "primary_hue is required",
                format!("set {}, e.g.: 212", Self::FIELDS.primary_hue),
            ),
            Some(Err(e)) => diag.error_with_hint(
                Self::FIELDS.primary_hue,
                e.to_string(),
                "use an integer from 0 to 359, e.g.: 212",
            ),
            Some(Ok(_)) => {}
        }
    }

    pub fn hue(&self) -> Option<PrimaryHue> {
        self.primary_hue.and_then(|h| PrimaryHue::try_from(h).ok())
    }
}
