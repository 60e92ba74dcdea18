//! SEO metadata handed to the host renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder in a title template, replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "%s";

/// Title template and default description for generated pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title_template: String,
    pub description: String,
}

impl SeoMetadata {
    /// Fill the template's placeholder with `page_title`.
    ///
    /// `"%s - TurboCore"` with `"Getting Started"` gives
    /// `"Getting Started - TurboCore"`.
    pub fn compose_title(&self, page_title: &str) -> String {
        self.title_template.replacen(TITLE_PLACEHOLDER, page_title, 1)
    }
}

/// Count placeholders in a title template.
pub fn placeholder_count(template: &str) -> usize {
    template.matches(TITLE_PLACEHOLDER).count()
}

/// Source of SEO metadata.
///
/// Called by the host renderer once per page or once per build. Must be pure
/// and must not fail.
pub trait SeoMetadataProvider: Send + Sync {
    fn metadata(&self) -> SeoMetadata;
}

impl<F> SeoMetadataProvider for F
where
    F: Fn() -> SeoMetadata + Send + Sync,
{
    fn metadata(&self) -> SeoMetadata {
        self()
    }
}

/// Provider returning the same metadata on every call.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticSeoProvider(SeoMetadata);

impl StaticSeoProvider {
    pub const fn new(metadata: SeoMetadata) -> Self {
        Self(metadata)
    }
}

impl SeoMetadataProvider for StaticSeoProvider {
    fn metadata(&self) -> SeoMetadata {
        self.0.clone()
    }
}

impl fmt::Debug for StaticSeoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticSeoProvider").field(&self.0).finish()
    }
}
