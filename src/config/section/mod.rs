//! Configuration section definitions.
//!
//! Each module corresponds to a section in `theme.toml`:
//!
//! | Module       | TOML Section    | Purpose                          |
//! |--------------|-----------------|----------------------------------|
//! | `brand`      | `[brand]`       | Logo shown in the site header    |
//! | `project`    | `[project]`     | External project link            |
//! | `seo`        | `[seo]`         | Title template and description   |
//! | `appearance` | `[appearance]`  | Dark mode and palette hue        |
//! | `footer`     | `[footer]`      | Footer text template             |

mod appearance;
mod brand;
mod footer;
mod project;
mod seo;

pub use appearance::AppearanceConfig;
pub use brand::BrandConfig;
pub use footer::FooterConfig;
pub use project::ProjectConfig;
pub use seo::SeoConfig;
