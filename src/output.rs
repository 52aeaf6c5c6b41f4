//! CLI output formatting.
//!
//! Each command has a `format_*` function returning display lines (pure, no
//! I/O, so tests can assert on them) and a `print_*` wrapper writing them to
//! stdout. Entities lead with a positional index and their identity; details
//! follow as indented context lines:
//!
//! ```text
//! Deployment
//!     Host: GitHub Pages
//!     Base: /easy-vibe/
//!     Site URL: https://datawhalechina.github.io/easy-vibe
//!
//! Locales
//! 001 zh-cn 简体中文
//!     Head: 43 tags (11 alternates)
//!     Nav: 5 items
//!     Sidebar: 9 prefixes, 160 links
//! 002 en-us English (US)
//!     Head: 43 tags (11 alternates)
//!     Nav: 5 items
//!     Sidebar: none
//!
//! Sitemap
//!     Hostname: https://datawhalechina.github.io/easy-vibe
//!     Excluded: /extra/, /examples/, /project/
//! ```

use crate::locale::LocaleEntry;
use crate::site::SiteConfig;
use crate::sitemap::SitemapOptions;
use crate::types::{SidebarItem, SidebarMap};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `"s"` unless the count is exactly one.
fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count with a regular noun: `1 tag`, `3 tags`.
fn count(n: usize, noun: &str) -> String {
    format!("{} {}{}", n, noun, plural_s(n))
}

/// Count with an explicit plural form: `1 prefix`, `9 prefixes`.
fn count_irregular(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}

// ============================================================================
// resolve
// ============================================================================

/// Summary of a resolved site configuration.
pub fn format_site_summary(site: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        "Deployment".to_string(),
        format!("    Host: {}", site.deployment.hosting),
        format!("    Base: {}", site.base),
        format!("    Site URL: {}", site.deployment.site_url),
        String::new(),
        "Locales".to_string(),
    ];

    for (i, (code, locale)) in site.locales.iter().enumerate() {
        lines.push(format!("{} {} {}", format_index(i + 1), code, locale.label));
        let alternates = locale
            .head
            .iter()
            .filter(|t| t.attr("rel") == Some("alternate"))
            .count();
        lines.push(format!(
            "    Head: {} ({})",
            count(locale.head.len(), "tag"),
            count(alternates, "alternate")
        ));
        lines.push(format!(
            "    Nav: {}",
            count(locale.theme_config.nav.len(), "item")
        ));
        let sidebar = &locale.theme_config.sidebar;
        if sidebar.is_empty() {
            lines.push("    Sidebar: none".to_string());
        } else {
            lines.push(format!(
                "    Sidebar: {}, {}",
                count_irregular(sidebar.len(), "prefix", "prefixes"),
                count(sidebar.links().len(), "link")
            ));
        }
    }

    lines.push(String::new());
    lines.push("Sitemap".to_string());
    lines.push(format!("    Hostname: {}", site.sitemap.hostname));
    lines.push(format!("    Excluded: {}", site.sitemap.exclude.join(", ")));
    lines
}

pub fn print_site_summary(site: &SiteConfig) {
    for line in format_site_summary(site) {
        println!("{}", line);
    }
}

// ============================================================================
// locales
// ============================================================================

/// One header line per locale plus its SEO identifiers.
///
/// ```text
/// 001 zh-cn 简体中文
///     lang: zh-CN, hreflang: zh-CN, og: zh_CN
/// ```
pub fn format_locale_table(entries: &[LocaleEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{} {} {}",
            format_index(i + 1),
            entry.code,
            entry.display_label
        ));
        lines.push(format!(
            "    lang: {}, hreflang: {}, og: {}",
            entry.html_lang, entry.hreflang, entry.og_locale
        ));
    }
    lines
}

pub fn print_locale_table(entries: &[LocaleEntry]) {
    for line in format_locale_table(entries) {
        println!("{}", line);
    }
}

// ============================================================================
// sidebar
// ============================================================================

/// Sidebar tree: prefixes, then groups and links indented by depth.
///
/// ```text
/// /zh-cn/guide/
///     001 课程指南
///         001 课程介绍 → /zh-cn/guide/introduction
/// ```
pub fn format_sidebar(sidebar: &SidebarMap) -> Vec<String> {
    if sidebar.is_empty() {
        return vec!["(no sidebar)".to_string()];
    }
    let mut lines = Vec::new();
    for (prefix, sections) in sidebar.iter() {
        lines.push(prefix.to_string());
        for (i, section) in sections.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(i + 1), section.text));
            format_items(&section.items, 2, &mut lines);
        }
    }
    lines
}

fn format_items(items: &[SidebarItem], depth: usize, lines: &mut Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        match item {
            SidebarItem::Link(link) => lines.push(format!(
                "{}{} {} → {}",
                indent(depth),
                format_index(i + 1),
                link.text,
                link.link
            )),
            SidebarItem::Section(section) => {
                lines.push(format!(
                    "{}{} {}",
                    indent(depth),
                    format_index(i + 1),
                    section.text
                ));
                format_items(&section.items, depth + 1, lines);
            }
        }
    }
}

pub fn print_sidebar(sidebar: &SidebarMap) {
    for line in format_sidebar(sidebar) {
        println!("{}", line);
    }
}

// ============================================================================
// sitemap
// ============================================================================

/// Include/exclude verdict per URL, in input order.
pub fn format_sitemap_check(options: &SitemapOptions, urls: &[String]) -> Vec<String> {
    urls.iter()
        .map(|url| {
            let verdict = if options.includes(url) {
                "include"
            } else {
                "exclude"
            };
            format!("{verdict} {url}")
        })
        .collect()
}

pub fn print_sitemap_check(options: &SitemapOptions, urls: &[String]) {
    for line in format_sitemap_check(options, urls) {
        println!("{}", line);
    }
}
