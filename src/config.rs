//! Project configuration module.
//!
//! Handles loading, validating, and merging the optional `site.toml` file.
//! Every constant the resolver bakes into the emitted site configuration
//! (deployment URLs, SEO literals, publisher identity, theme copy) has a
//! stock default here; `site.toml` overrides only the keys it names.
//!
//! ## Config File Location
//!
//! `site.toml` is looked up in the config directory (`--config-dir`,
//! defaulting to the working directory):
//!
//! ```text
//! docs/
//! ├── site.toml        # Optional, sparse overrides
//! ├── zh-cn/
//! └── en-us/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [deploy]
//! fallback_base = "/easy-vibe/"      # Base path when no hosting flag is set
//! github_pages_url = "https://datawhalechina.github.io/easy-vibe"
//! vercel_url = "https://your-project.vercel.app"
//!
//! [seo]
//! theme_color = "#3eaf7c"
//! author = "Datawhale"
//! robots = "index,follow"
//! og_image_width = 1200
//! og_image_height = 630
//!
//! [publisher]
//! name = "Datawhale"
//! url = "https://datawhalechina.github.io"
//!
//! [sitemap]
//! hostname = "https://datawhalechina.github.io/easy-vibe"
//! exclude = ["/extra/", "/examples/", "/project/"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// File name looked up inside the config directory.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Project configuration loaded from `site.toml`.
///
/// All fields have defaults matching the published site. User config files
/// need only specify the values they want to override. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Base path fallback and canonical hostnames per hosting provider.
    pub deploy: DeployConfig,
    /// Literal values emitted into every locale's head tags.
    pub seo: SeoConfig,
    /// Organization named in the structured-data publisher block.
    pub publisher: PublisherConfig,
    /// Theme settings shared by every locale.
    pub theme: ThemeConfig,
    /// Markdown pipeline switches forwarded to the generator.
    pub markdown: MarkdownConfig,
    /// Sitemap hostname and excluded directory markers.
    pub sitemap: SitemapConfig,
}

impl ProjectConfig {
    /// Validate config values are well-formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.deploy.fallback_base;
        if !base.starts_with('/') || !base.ends_with('/') {
            return Err(ConfigError::Validation(
                "deploy.fallback_base must start and end with '/'".into(),
            ));
        }
        for (key, url) in [
            ("deploy.github_pages_url", &self.deploy.github_pages_url),
            ("deploy.vercel_url", &self.deploy.vercel_url),
            ("publisher.url", &self.publisher.url),
            ("sitemap.hostname", &self.sitemap.hostname),
        ] {
            if !is_absolute_url(url) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be an absolute http(s) URL"
                )));
            }
            if url.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "{key} must not end with '/'"
                )));
            }
        }
        if self.seo.og_image_width == 0 || self.seo.og_image_height == 0 {
            return Err(ConfigError::Validation(
                "seo.og_image_width and seo.og_image_height must be non-zero".into(),
            ));
        }
        let [min, max] = self.theme.outline_levels;
        if min == 0 || min > max || max > 6 {
            return Err(ConfigError::Validation(
                "theme.outline_levels must satisfy 1 <= min <= max <= 6".into(),
            ));
        }
        if self.sitemap.exclude.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::Validation(
                "sitemap.exclude entries must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn is_absolute_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Deployment settings consumed by the environment resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Repository-scoped subpath used when no hosting flag is set.
    pub fallback_base: String,
    /// Canonical site URL for every host other than Vercel.
    pub github_pages_url: String,
    /// Canonical site URL when the Vercel flag is set.
    pub vercel_url: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            fallback_base: "/easy-vibe/".to_string(),
            github_pages_url: "https://datawhalechina.github.io/easy-vibe".to_string(),
            vercel_url: "https://your-project.vercel.app".to_string(),
        }
    }
}

/// SEO literals shared by every locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoConfig {
    pub theme_color: String,
    pub author: String,
    /// Comma-separated keyword list for `<meta name="keywords">`.
    pub keywords: String,
    /// Directive used for `robots`, `googlebot` and `baiduspider`.
    pub robots: String,
    pub og_image_width: u32,
    pub og_image_height: u32,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            theme_color: "#3eaf7c".to_string(),
            author: "Datawhale".to_string(),
            keywords: DEFAULT_KEYWORDS.to_string(),
            robots: "index,follow".to_string(),
            og_image_width: 1200,
            og_image_height: 630,
        }
    }
}

const DEFAULT_KEYWORDS: &str = "AI编程,Vibe Coding,Claude Code,Cursor,Trae,AI IDE,零基础学编程,AI辅助开发,产品经理,全栈开发,编程教程,编程工具,Datawhale,Supabase,React,大模型,LLM,人工智能,微信小程序,Android开发,iOS开发,MCP,RAG,LangGraph,Dify,跨平台开发,AI应用开发";

/// Organization credited as the structured-data publisher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublisherConfig {
    pub name: String,
    pub url: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            name: "Datawhale".to_string(),
            url: "https://datawhalechina.github.io".to_string(),
        }
    }
}

/// Theme settings shared by every locale's `themeConfig`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Logo file, relative to the base path.
    pub logo: String,
    /// Search provider name passed through to the generator.
    pub search_provider: String,
    /// Heading levels shown in the page outline, as `[min, max]`.
    pub outline_levels: [u8; 2],
    /// Footer message (HTML allowed).
    pub footer_message: String,
    /// Footer copyright line (HTML allowed).
    pub footer_copyright: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            logo: "logo.png".to_string(),
            search_provider: "local".to_string(),
            outline_levels: [1, 6],
            footer_message: DEFAULT_FOOTER_MESSAGE.to_string(),
            footer_copyright: DEFAULT_FOOTER_COPYRIGHT.to_string(),
        }
    }
}

const DEFAULT_FOOTER_MESSAGE: &str = r#"<a href="https://beian.miit.gov.cn/" target="_blank">京ICP备2026002630号-1</a> | <a href="https://beian.mps.gov.cn/#/query/webSearch?code=11010602202215" rel="noreferrer" target="_blank">京公网安备11010602202215号</a>"#;

const DEFAULT_FOOTER_COPYRIGHT: &str = r#"本作品采用 <a href="http://creativecommons.org/licenses/by-nc-sa/4.0/" target="_blank">知识共享署名-非商业性使用-相同方式共享 4.0 国际许可协议（CC BY-NC-SA 4.0）</a> 进行许可"#;

/// Markdown pipeline switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    /// Enable TeX math rendering in the generator.
    pub math: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { math: true }
    }
}

/// Sitemap settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    pub hostname: String,
    /// URL substrings whose pages are dropped from the sitemap.
    pub exclude: Vec<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            hostname: "https://datawhalechina.github.io/easy-vibe".to_string(),
            exclude: crate::sitemap::EXCLUDED_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ProjectConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `site.toml`.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no project config, using stock defaults");
        return Ok(None);
    }
    debug!(path = %config_path.display(), "loading project config");
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ProjectConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ProjectConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `site.toml` from the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml`.
///
/// Used by the `gen-config` CLI command. Long HTML defaults (footer copy and
/// the keyword list) are left out; omitting a key keeps its default.
pub fn stock_config_toml() -> &'static str {
    r##"# Easy-Vibe site configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Deployment
# ---------------------------------------------------------------------------
[deploy]
# Base path used when neither BASE nor a hosting flag (VERCEL, VERCEL_URL,
# EDGEONE) is set. Must start and end with '/'.
fallback_base = "/easy-vibe/"

# Canonical site URL for GitHub Pages, EdgeOne and local builds.
github_pages_url = "https://datawhalechina.github.io/easy-vibe"

# Canonical site URL when building on Vercel.
vercel_url = "https://your-project.vercel.app"

# ---------------------------------------------------------------------------
# SEO
# ---------------------------------------------------------------------------
[seo]
theme_color = "#3eaf7c"
author = "Datawhale"

# Directive used for robots, googlebot and baiduspider.
robots = "index,follow"

# Dimensions advertised for the Open Graph image.
og_image_width = 1200
og_image_height = 630

# keywords = "AI编程,Vibe Coding,..."

# ---------------------------------------------------------------------------
# Structured-data publisher
# ---------------------------------------------------------------------------
[publisher]
name = "Datawhale"
url = "https://datawhalechina.github.io"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Logo file, relative to the base path.
logo = "logo.png"
search_provider = "local"

# Heading levels shown in the page outline, as [min, max].
outline_levels = [1, 6]

# footer_message = "..."
# footer_copyright = "..."

# ---------------------------------------------------------------------------
# Markdown
# ---------------------------------------------------------------------------
[markdown]
# Render TeX math in markdown content.
math = true

# ---------------------------------------------------------------------------
# Sitemap
# ---------------------------------------------------------------------------
[sitemap]
hostname = "https://datawhalechina.github.io/easy-vibe"

# Pages whose URL contains any of these markers are left out of the sitemap.
exclude = ["/extra/", "/examples/", "/project/"]
"##
}
