//! `[brand]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [brand]
//! logo = { tag = "h1", children = ["TurboCore Docs"] }
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::theme::Markup;

/// Branding shown in the site header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "brand")]
pub struct BrandConfig {
    /// Logo markup: a string or { tag, attrs, children }.
    pub logo: Markup,
}

impl BrandConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.logo.validate(Self::FIELDS.logo, diag);
    }
}
