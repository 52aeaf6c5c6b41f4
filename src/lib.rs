//! # Easy-Vibe Site
//!
//! Resolves the configuration object the static-site generator consumes to
//! build the multilingual Easy-Vibe tutorial. The configuration is data, not
//! code: it is computed once from the process environment, an optional
//! `site.toml`, and the static locale and sidebar tables, then emitted as
//! JSON.
//!
//! # Pipeline
//!
//! ```text
//! 1. Environment   BASE / VERCEL / VERCEL_URL / EDGEONE  →  Deployment
//! 2. Locales       locale table + Deployment              →  head tags, nav, sidebar
//! 3. Assemble      everything                             →  SiteConfig (JSON)
//! ```
//!
//! Every step is a pure function of its inputs: no I/O beyond reading the
//! environment once and `site.toml` once, and no step can fail once the
//! config file has loaded.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`env`] | Hosting detection, base path and canonical site URL |
//! | [`locale`] | Static locale metadata table with default-locale fallback |
//! | [`head`] | SEO head tags per locale, and their HTML rendering |
//! | [`sidebar`] | Static sidebar trees keyed by URL prefix |
//! | [`sitemap`] | Legacy-directory filter for sitemap entries |
//! | [`site`] | Assembly of the root [`site::SiteConfig`] |
//! | [`config`] | `site.toml` loading, validation and merging over stock defaults |
//! | [`types`] | Navigation types shared by nav bar and sidebar |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Self-Referencing Alternates
//!
//! Every locale's head lists an `hreflang` alternate for *every* locale,
//! itself included, followed by `x-default`. Search engines accept the
//! self-reference and downstream SEO tooling expects the full set, so the
//! list is not filtered.
//!
//! ## No Link Validation
//!
//! Sidebar links are not checked against content. The emitted config sets
//! `ignoreDeadLinks`, so a stale entry surfaces as a broken link on the
//! published site rather than a failed build.
//!
//! ## Ordered Output
//!
//! Locales, sidebar prefixes and head tag attributes are kept in insertion
//! order all the way to JSON. The generator matches sidebar prefixes in
//! order and renders the language switcher in locale order.

pub mod config;
pub mod env;
pub mod head;
pub mod locale;
pub mod output;
pub mod sidebar;
pub mod site;
pub mod sitemap;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
