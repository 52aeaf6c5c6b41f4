//! Assembly of the site configuration handed to the generator.
//!
//! [`resolve_site_config`] runs the whole pipeline once: resolve the
//! deployment from the environment, then for every locale in table order
//! build its head tags, top nav and sidebar. The result serializes to the
//! generator's config schema (camelCase keys, locales in table order).

use crate::config::ProjectConfig;
use crate::env::{Deployment, EnvVars};
use crate::head::{HeadContext, HeadTag, build_head_tags};
use crate::locale::{LocaleEntry, locales};
use crate::sidebar::build_sidebar;
use crate::sitemap::SitemapOptions;
use crate::types::{NavItem, SidebarMap};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::debug;

/// Root configuration object consumed by the generator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub base: String,
    /// Always true: link integrity is left to the published site.
    pub ignore_dead_links: bool,
    pub markdown: MarkdownOptions,
    pub sitemap: SitemapOptions,
    pub locales: Locales,
    /// Resolution details, not part of the generator schema.
    #[serde(skip)]
    pub deployment: Deployment,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkdownOptions {
    pub math: bool,
}

/// Locale configs keyed by code, in table order.
#[derive(Debug, Clone, Default)]
pub struct Locales(Vec<(String, LocaleConfig)>);

impl Locales {
    pub fn get(&self, code: &str) -> Option<&LocaleConfig> {
        self.0.iter().find(|(c, _)| c == code).map(|(_, config)| config)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleConfig)> {
        self.0.iter().map(|(code, config)| (code.as_str(), config))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Locales {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, config) in &self.0 {
            map.serialize_entry(code, config)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    pub label: String,
    pub lang: String,
    pub link: String,
    pub title: String,
    pub description: String,
    pub head: Vec<HeadTag>,
    pub theme_config: ThemeOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeOptions {
    pub logo: String,
    pub search: SearchOptions,
    pub outline: OutlineOptions,
    pub nav: Vec<NavItem>,
    pub sidebar: SidebarMap,
    pub footer: FooterOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOptions {
    pub provider: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutlineOptions {
    /// `[min, max]` heading levels.
    pub level: [u8; 2],
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterOptions {
    pub message: String,
    pub copyright: String,
}

/// Resolve the full site configuration.
pub fn resolve_site_config(env: &EnvVars, config: &ProjectConfig) -> SiteConfig {
    let deployment = Deployment::resolve(env, &config.deploy);
    let ctx = HeadContext {
        deployment: &deployment,
        config,
    };
    let locales = Locales(
        locales()
            .iter()
            .map(|entry| (entry.code.to_string(), locale_config(&ctx, entry)))
            .collect(),
    );

    SiteConfig {
        base: deployment.base.clone(),
        ignore_dead_links: true,
        markdown: MarkdownOptions {
            math: config.markdown.math,
        },
        sitemap: SitemapOptions::from_config(&config.sitemap),
        locales,
        deployment,
    }
}

fn locale_config(ctx: &HeadContext<'_>, entry: &LocaleEntry) -> LocaleConfig {
    let head = build_head_tags(ctx, entry.code, entry.title, entry.description, None);
    let sidebar = build_sidebar(entry.code);
    debug!(
        locale = entry.code,
        head_tags = head.len(),
        sidebar_prefixes = sidebar.len(),
        "built locale config"
    );
    let theme = &ctx.config.theme;

    LocaleConfig {
        label: entry.display_label.to_string(),
        lang: entry.html_lang.to_string(),
        link: entry.root_path(),
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        head,
        theme_config: ThemeOptions {
            logo: ctx.deployment.asset(&theme.logo),
            search: SearchOptions {
                provider: theme.search_provider.clone(),
            },
            outline: OutlineOptions {
                level: theme.outline_levels,
                label: entry.outline_label.to_string(),
            },
            nav: entry
                .nav
                .iter()
                .map(|(text, link)| NavItem::new(*text, *link))
                .collect(),
            sidebar,
            footer: FooterOptions {
                message: theme.footer_message.clone(),
                copyright: theme.footer_copyright.clone(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Hosting;

    fn resolve(pairs: &[(&str, &str)]) -> SiteConfig {
        resolve_site_config(
            &EnvVars::from_pairs(pairs.iter().copied()),
            &ProjectConfig::default(),
        )
    }

    #[test]
    fn every_locale_present_in_table_order() {
        let site = resolve(&[]);
        let codes: Vec<_> = site.locales.iter().map(|(code, _)| code).collect();
        let expected: Vec<_> = locales().iter().map(|e| e.code).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn base_follows_environment() {
        assert_eq!(resolve(&[]).base, "/easy-vibe/");
        assert_eq!(resolve(&[("VERCEL", "1")]).base, "/");
        assert_eq!(resolve(&[("BASE", "/custom/")]).base, "/custom/");
        assert_eq!(resolve(&[("EDGEONE", "1")]).deployment.hosting, Hosting::EdgeOne);
    }

    #[test]
    fn locale_entry_fields_flow_through() {
        let site = resolve(&[]);
        let en = site.locales.get("en-us").unwrap();
        assert_eq!(en.label, "English (US)");
        assert_eq!(en.lang, "en-US");
        assert_eq!(en.link, "/en-us/");
        assert_eq!(en.title, "Easy-Vibe Tutorial");
        assert_eq!(en.theme_config.outline.label, "On this page");
        assert_eq!(en.theme_config.outline.level, [1, 6]);
        assert_eq!(en.theme_config.nav[0], NavItem::new("Home", "/en-us/"));
        assert!(en.theme_config.sidebar.is_empty());
    }

    #[test]
    fn head_uses_locale_title() {
        let site = resolve(&[]);
        let de = site.locales.get("de-de").unwrap();
        let og_title = de
            .head
            .iter()
            .find(|t| t.meta_key() == Some("og:title"))
            .unwrap();
        assert_eq!(og_title.attr("content"), Some("Easy-Vibe Tutorial"));
    }

    #[test]
    fn logo_is_base_relative() {
        assert_eq!(
            resolve(&[]).locales.get("zh-cn").unwrap().theme_config.logo,
            "/easy-vibe/logo.png"
        );
        assert_eq!(
            resolve(&[("VERCEL", "1")]).locales.get("zh-cn").unwrap().theme_config.logo,
            "/logo.png"
        );
    }

    #[test]
    fn serializes_generator_schema() {
        let json = serde_json::to_value(resolve(&[])).unwrap();
        assert_eq!(json["base"], "/easy-vibe/");
        assert_eq!(json["ignoreDeadLinks"], true);
        assert_eq!(json["markdown"]["math"], true);
        assert_eq!(
            json["sitemap"]["hostname"],
            "https://datawhalechina.github.io/easy-vibe"
        );
        assert!(json.get("deployment").is_none());

        let zh = &json["locales"]["zh-cn"];
        assert_eq!(zh["lang"], "zh-CN");
        assert_eq!(zh["themeConfig"]["search"]["provider"], "local");
        assert_eq!(zh["themeConfig"]["outline"]["level"], serde_json::json!([1, 6]));
        assert_eq!(zh["head"][0][0], "link");
        assert_eq!(
            zh["themeConfig"]["sidebar"]["/zh-cn/stage-0/"][0]["text"],
            "新手入门"
        );
        assert!(zh["themeConfig"]["footer"]["message"].as_str().unwrap().contains("beian"));
    }

    #[test]
    fn serialized_locales_keep_table_order() {
        let json = serde_json::to_value(resolve(&[])).unwrap();
        let keys: Vec<_> = json["locales"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.first().map(String::as_str), Some("zh-cn"));
        assert_eq!(keys.last().map(String::as_str), Some("vi-vn"));
    }
}
