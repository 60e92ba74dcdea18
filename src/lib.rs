//! Theme configuration for the TurboCore documentation site.
//!
//! The host renderer reads a [`ThemeConfiguration`] built once per
//! generation run from `theme.toml`:
//!
//! ```ignore
//! use docs_theme::{ThemeConfig, ThemeConfiguration, theme::SystemClock};
//!
//! let config = ThemeConfig::from_path("theme.toml".as_ref())?.config;
//! let theme = ThemeConfiguration::from_config(&config, &SystemClock)?;
//! assert_eq!(theme.compose_title("Getting Started"), "Getting Started - TurboCore");
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod schema;
pub mod theme;
pub mod utils;

pub use config::{ConfigError, ThemeConfig};
pub use schema::HostTheme;
pub use theme::ThemeConfiguration;
