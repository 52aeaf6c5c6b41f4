//! Shared test utilities for the head, site and output test suites.
//!
//! Provides canned deployments and lookup helpers over head tag lists.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = ProjectConfig::default();
//! let deployment = github_pages(&config);
//! let head = build_head_tags(&HeadContext { deployment: &deployment, config: &config }, "zh-cn", "T", "D", None);
//!
//! assert_eq!(meta_content(&head, "og:locale"), Some("zh_CN"));
//! ```

use crate::config::ProjectConfig;
use crate::env::{Deployment, EnvVars};
use crate::head::HeadTag;

// =========================================================================
// Deployments
// =========================================================================

/// Deployment with no hosting flags set.
pub fn github_pages(config: &ProjectConfig) -> Deployment {
    Deployment::resolve(&EnvVars::default(), &config.deploy)
}

/// Deployment as seen on a Vercel build.
pub fn vercel(config: &ProjectConfig) -> Deployment {
    Deployment::resolve(&EnvVars::from_pairs([("VERCEL", "1")]), &config.deploy)
}

// =========================================================================
// Head tag lookups
// =========================================================================

/// Content of the meta tag keyed by `key` (`name` or `property`).
pub fn meta_content<'a>(head: &'a [HeadTag], key: &str) -> Option<&'a str> {
    head.iter()
        .find(|t| t.meta_key() == Some(key))
        .and_then(|t| t.attr("content"))
}

/// First `<link>` with the given `rel`.
pub fn find_link<'a>(head: &'a [HeadTag], rel: &str) -> Option<&'a HeadTag> {
    head.iter()
        .find(|t| t.tag == "link" && t.attr("rel") == Some(rel))
}

/// `hreflang` values of every alternate link, in order.
pub fn hreflang_values(head: &[HeadTag]) -> Vec<&str> {
    head.iter()
        .filter(|t| t.attr("rel") == Some("alternate"))
        .filter_map(|t| t.attr("hreflang"))
        .collect()
}
