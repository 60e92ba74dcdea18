//! `[footer]` section configuration.
//!
//! `{year}` in any text node is replaced by the current calendar year when
//! the theme is built.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! text = { tag = "span", children = ["{year} © TurboCore."] }
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::theme::Markup;

/// Footer content block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "footer")]
pub struct FooterConfig {
    /// Footer markup, `{year}` expands to the current year.
    pub text: Markup,
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.text.validate(Self::FIELDS.text, diag);
    }
}
