//! Sitemap filtering.
//!
//! Legacy content directories are still built (old links keep working) but
//! are left out of the sitemap so search engines index the migrated pages.

use crate::config::SitemapConfig;
use serde::Serialize;

/// URL substrings marking legacy directories.
pub const EXCLUDED_MARKERS: [&str; 3] = ["/extra/", "/examples/", "/project/"];

/// Whether a page URL belongs in the sitemap, using the stock markers.
pub fn should_include_in_sitemap(url: &str) -> bool {
    !EXCLUDED_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Sitemap section of the emitted site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapOptions {
    pub hostname: String,
    /// Markers applied by the generator-side item filter.
    pub exclude: Vec<String>,
}

impl SitemapOptions {
    pub fn from_config(config: &SitemapConfig) -> Self {
        Self {
            hostname: config.hostname.clone(),
            exclude: config.exclude.clone(),
        }
    }

    pub fn includes(&self, url: &str) -> bool {
        !self.exclude.iter().any(|marker| url.contains(marker.as_str()))
    }
}
