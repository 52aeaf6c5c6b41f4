//! Per-locale `<head>` tag generation.
//!
//! Each locale gets the same tag list in the same order, parameterized by
//! its metadata, the deployment and the project config:
//!
//! ```text
//! favicon, stylesheet
//! theme-color, viewport, format-detection
//! canonical
//! og:*            (10 tags)
//! twitter:*       (7 tags)
//! keywords, author, robots, googlebot, baiduspider, distribution, rating, revisit-after
//! hreflang alternates (one per locale, then x-default)
//! JSON-LD WebSite script
//! ```
//!
//! Tags are data ([`HeadTag`]); they serialize to the generator's
//! `[tag, attrs, content?]` tuples, and [`render_head`] turns them into HTML
//! for previews.

use crate::config::ProjectConfig;
use crate::env::Deployment;
use crate::locale::{self, locale_meta};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::ser::{SerializeMap, SerializeTuple, Serializer};
use serde::Serialize;
use serde_json::json;

/// One element of the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub tag: String,
    /// Attributes in emission order.
    pub attrs: Vec<(String, String)>,
    pub content: Option<String>,
}

impl HeadTag {
    pub fn new<K, V>(tag: &str, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tag: tag.to_string(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            content: None,
        }
    }

    pub fn link(rel: &str, href: impl Into<String>) -> Self {
        Self::new("link", [("rel", rel.to_string()), ("href", href.into())])
    }

    /// `<meta name=.. content=..>`
    pub fn meta_name(name: &str, content: impl Into<String>) -> Self {
        Self::new("meta", [("name", name.to_string()), ("content", content.into())])
    }

    /// `<meta property=.. content=..>`, the Open Graph form.
    pub fn meta_property(property: &str, content: impl Into<String>) -> Self {
        Self::new(
            "meta",
            [("property", property.to_string()), ("content", content.into())],
        )
    }

    pub fn alternate(hreflang: &str, href: impl Into<String>) -> Self {
        Self::new(
            "link",
            [
                ("rel", "alternate".to_string()),
                ("hreflang", hreflang.to_string()),
                ("href", href.into()),
            ],
        )
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `name` or `property` a meta tag is keyed by.
    pub fn meta_key(&self) -> Option<&str> {
        if self.tag != "meta" {
            return None;
        }
        self.attr("name").or_else(|| self.attr("property"))
    }
}

struct Attrs<'a>(&'a [(String, String)]);

impl Serialize for Attrs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut tuple = serializer.serialize_tuple(len)?;
        tuple.serialize_element(&self.tag)?;
        tuple.serialize_element(&Attrs(&self.attrs))?;
        if let Some(content) = &self.content {
            tuple.serialize_element(content)?;
        }
        tuple.end()
    }
}

/// Inputs shared by every locale's head.
#[derive(Debug, Clone, Copy)]
pub struct HeadContext<'a> {
    pub deployment: &'a Deployment,
    pub config: &'a ProjectConfig,
}

/// Build the head tag list for one locale.
///
/// `canonical_path`, when given, is appended to the site URL as-is; otherwise
/// the canonical URL is the locale root. Unknown locales use the default
/// locale's metadata but keep their own code in the canonical URL.
pub fn build_head_tags(
    ctx: &HeadContext<'_>,
    locale: &str,
    title: &str,
    description: &str,
    canonical_path: Option<&str>,
) -> Vec<HeadTag> {
    let meta = locale_meta(locale);
    let seo = &ctx.config.seo;
    let site_url = ctx.deployment.site_url.as_str();
    let canonical = match canonical_path {
        Some(path) => format!("{site_url}{path}"),
        None => format!("{site_url}/{locale}/"),
    };
    let og_image = format!("{site_url}{}{}", ctx.deployment.base, ctx.config.theme.logo);

    let mut head = vec![
        HeadTag::link("icon", ctx.deployment.asset(&ctx.config.theme.logo)),
        HeadTag::link("stylesheet", ctx.deployment.asset("style.css")),
        HeadTag::meta_name("theme-color", &seo.theme_color),
        HeadTag::meta_name("viewport", "width=device-width, initial-scale=1.0"),
        HeadTag::meta_name("format-detection", "telephone=no"),
        HeadTag::link("canonical", &canonical),
        // Open Graph
        HeadTag::meta_property("og:type", "website"),
        HeadTag::meta_property("og:locale", meta.og_locale),
        HeadTag::meta_property("og:site_name", title),
        HeadTag::meta_property("og:title", title),
        HeadTag::meta_property("og:description", description),
        HeadTag::meta_property("og:image", &og_image),
        HeadTag::meta_property("og:image:alt", title),
        HeadTag::meta_property("og:image:width", seo.og_image_width.to_string()),
        HeadTag::meta_property("og:image:height", seo.og_image_height.to_string()),
        HeadTag::meta_property("og:url", &canonical),
        // Twitter Card
        HeadTag::meta_name("twitter:card", "summary_large_image"),
        HeadTag::meta_name("twitter:site", meta.twitter_handle),
        HeadTag::meta_name("twitter:creator", meta.twitter_handle),
        HeadTag::meta_name("twitter:title", title),
        HeadTag::meta_name("twitter:description", description),
        HeadTag::meta_name("twitter:image", &og_image),
        HeadTag::meta_name("twitter:image:alt", title),
        // Crawlers
        HeadTag::meta_name("keywords", &seo.keywords),
        HeadTag::meta_name("author", &seo.author),
        HeadTag::meta_name("robots", &seo.robots),
        HeadTag::meta_name("googlebot", &seo.robots),
        HeadTag::meta_name("baiduspider", &seo.robots),
        HeadTag::meta_name("distribution", "global"),
        HeadTag::meta_name("rating", "general"),
        HeadTag::meta_name("revisit-after", "7 days"),
    ];

    // Every locale, the current one included.
    for entry in locale::locales() {
        head.push(HeadTag::alternate(
            entry.hreflang,
            format!("{site_url}{}", entry.root_path()),
        ));
    }
    head.push(HeadTag::alternate(
        "x-default",
        format!("{site_url}{}", locale::default_locale().root_path()),
    ));

    let json_ld = json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": title,
        "description": description,
        "url": site_url,
        "inLanguage": meta.og_locale,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{site_url}/search?q={{search_term_string}}"),
            "query-input": "required name=search_term_string",
        },
        "publisher": {
            "@type": "Organization",
            "name": ctx.config.publisher.name,
            "url": ctx.config.publisher.url,
            "logo": {
                "@type": "ImageObject",
                "url": og_image,
            },
        },
    });
    head.push(HeadTag::new("script", [("type", "application/ld+json")]).with_content(json_ld.to_string()));

    head
}

const VOID_TAGS: [&str; 3] = ["meta", "link", "base"];

/// Render head tags as HTML, escaping attribute values.
pub fn render_head(tags: &[HeadTag]) -> Markup {
    // Tag names are data, which `html!` cannot emit; maud only escapes values.
    let mut out = String::new();
    for tag in tags {
        out.push('<');
        out.push_str(&tag.tag);
        for (name, value) in &tag.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html! { (value) }.into_string());
            out.push('"');
        }
        out.push('>');
        match &tag.content {
            Some(content) => {
                // Keep embedded JSON from closing the script element early.
                out.push_str(&content.replace("</", "<\\/"));
                out.push_str(&format!("</{}>", tag.tag));
            }
            None if !VOID_TAGS.contains(&tag.tag.as_str()) => {
                out.push_str(&format!("</{}>", tag.tag));
            }
            None => {}
        }
        out.push('\n');
    }
    PreEscaped(out)
}

/// Standalone preview document containing only the rendered head.
pub fn render_head_document(lang: &str, tags: &[HeadTag]) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="utf-8";
                (render_head(tags))
            }
            body {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnvVars;
    use crate::test_helpers::*;

    fn zh_head() -> Vec<HeadTag> {
        let config = ProjectConfig::default();
        let deployment = github_pages(&config);
        let ctx = HeadContext {
            deployment: &deployment,
            config: &config,
        };
        build_head_tags(&ctx, "zh-cn", "T", "D", None)
    }

    #[test]
    fn one_alternate_per_locale_plus_x_default() {
        let head = zh_head();
        let alternates = hreflang_values(&head);
        assert_eq!(alternates.len(), locale::locales().len() + 1);
        assert_eq!(alternates.iter().filter(|h| **h == "x-default").count(), 1);
        // The locale being built is listed too.
        assert!(alternates.contains(&"zh-CN"));
    }

    #[test]
    fn tag_count_and_fixed_order() {
        let head = zh_head();
        assert_eq!(head.len(), 31 + locale::locales().len() + 1 + 1);
        assert_eq!(head[0].attr("rel"), Some("icon"));
        assert_eq!(head[1].attr("rel"), Some("stylesheet"));
        assert_eq!(head[5].attr("rel"), Some("canonical"));
        assert_eq!(head[6].meta_key(), Some("og:type"));
        assert_eq!(head[16].meta_key(), Some("twitter:card"));
        assert_eq!(head[23].meta_key(), Some("keywords"));
        assert_eq!(head.last().unwrap().tag, "script");
    }

    #[test]
    fn canonical_and_assets_under_fallback_base() {
        let head = zh_head();
        assert_eq!(head[0].attr("href"), Some("/easy-vibe/logo.png"));
        assert_eq!(head[1].attr("href"), Some("/easy-vibe/style.css"));
        assert_eq!(
            find_link(&head, "canonical").unwrap().attr("href"),
            Some("https://datawhalechina.github.io/easy-vibe/zh-cn/")
        );
        assert_eq!(
            meta_content(&head, "og:url"),
            Some("https://datawhalechina.github.io/easy-vibe/zh-cn/")
        );
    }

    #[test]
    fn canonical_path_override() {
        let config = ProjectConfig::default();
        let deployment = vercel(&config);
        let ctx = HeadContext {
            deployment: &deployment,
            config: &config,
        };
        let head = build_head_tags(&ctx, "en-us", "T", "D", Some("/en-us/guide/intro"));
        assert_eq!(
            find_link(&head, "canonical").unwrap().attr("href"),
            Some("https://your-project.vercel.app/en-us/guide/intro")
        );
        assert_eq!(head[0].attr("href"), Some("/logo.png"));
        assert_eq!(
            meta_content(&head, "og:image"),
            Some("https://your-project.vercel.app/logo.png")
        );
    }

    #[test]
    fn locale_metadata_flows_into_tags() {
        let config = ProjectConfig::default();
        let deployment = github_pages(&config);
        let ctx = HeadContext {
            deployment: &deployment,
            config: &config,
        };
        let head = build_head_tags(&ctx, "ja-jp", "タイトル", "説明", None);
        assert_eq!(meta_content(&head, "og:locale"), Some("ja_JP"));
        assert_eq!(meta_content(&head, "og:title"), Some("タイトル"));
        assert_eq!(meta_content(&head, "twitter:description"), Some("説明"));
        assert_eq!(meta_content(&head, "twitter:site"), Some("@datawhale"));
        assert_eq!(meta_content(&head, "og:image:width"), Some("1200"));
    }

    #[test]
    fn unknown_locale_uses_default_metadata() {
        let config = ProjectConfig::default();
        let deployment = github_pages(&config);
        let ctx = HeadContext {
            deployment: &deployment,
            config: &config,
        };
        let head = build_head_tags(&ctx, "xx-yy", "T", "D", None);
        assert_eq!(meta_content(&head, "og:locale"), Some("zh_CN"));
        assert_eq!(
            find_link(&head, "canonical").unwrap().attr("href"),
            Some("https://datawhalechina.github.io/easy-vibe/xx-yy/")
        );
    }

    #[test]
    fn x_default_points_at_default_locale() {
        let head = zh_head();
        let x_default = head
            .iter()
            .find(|t| t.attr("hreflang") == Some("x-default"))
            .unwrap();
        assert_eq!(
            x_default.attr("href"),
            Some("https://datawhalechina.github.io/easy-vibe/zh-cn/")
        );
    }

    #[test]
    fn structured_data_describes_site() {
        let head = zh_head();
        let script = head.last().unwrap();
        assert_eq!(script.attr("type"), Some("application/ld+json"));
        let data: serde_json::Value =
            serde_json::from_str(script.content.as_deref().unwrap()).unwrap();
        assert_eq!(data["@type"], "WebSite");
        assert_eq!(data["name"], "T");
        assert_eq!(data["url"], "https://datawhalechina.github.io/easy-vibe");
        assert_eq!(data["inLanguage"], "zh_CN");
        assert_eq!(data["potentialAction"]["@type"], "SearchAction");
        assert_eq!(
            data["potentialAction"]["target"],
            "https://datawhalechina.github.io/easy-vibe/search?q={search_term_string}"
        );
        assert_eq!(data["publisher"]["name"], "Datawhale");
        assert_eq!(data["publisher"]["logo"]["@type"], "ImageObject");
    }

    #[test]
    fn structured_data_keys_keep_insertion_order() {
        let head = zh_head();
        let content = head.last().unwrap().content.clone().unwrap();
        assert!(content.starts_with(r#"{"@context":"https://schema.org","@type":"WebSite""#));
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        assert_eq!(zh_head(), zh_head());
    }

    #[test]
    fn base_override_flows_into_assets() {
        let config = ProjectConfig::default();
        let deployment = Deployment::resolve(
            &EnvVars::from_pairs([("BASE", "/preview/")]),
            &config.deploy,
        );
        let ctx = HeadContext {
            deployment: &deployment,
            config: &config,
        };
        let head = build_head_tags(&ctx, "zh-cn", "T", "D", None);
        assert_eq!(head[1].attr("href"), Some("/preview/style.css"));
    }

    #[test]
    fn serializes_as_generator_tuples() {
        let tag = HeadTag::meta_name("author", "Datawhale");
        assert_eq!(
            serde_json::to_string(&tag).unwrap(),
            r#"["meta",{"name":"author","content":"Datawhale"}]"#
        );
        let script = HeadTag::new("script", [("type", "application/ld+json")]).with_content("{}");
        assert_eq!(
            serde_json::to_string(&script).unwrap(),
            r#"["script",{"type":"application/ld+json"},"{}"]"#
        );
    }

    #[test]
    fn render_escapes_attribute_values() {
        let html = render_head(&[HeadTag::meta_name("og:title", r#"A "quoted" <title>"#)])
            .into_string();
        assert_eq!(
            html,
            "<meta name=\"og:title\" content=\"A &quot;quoted&quot; &lt;title&gt;\">\n"
        );
    }

    #[test]
    fn render_closes_script_and_guards_content() {
        let tag = HeadTag::new("script", [("type", "application/ld+json")])
            .with_content(r#"{"name":"</script>"}"#);
        let html = render_head(&[tag]).into_string();
        assert!(html.contains(r#"{"name":"<\/script>"}</script>"#));
    }

    #[test]
    fn render_document_wraps_head() {
        let html = render_head_document("zh-CN", &zh_head()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="zh-CN">"#));
        assert!(html.contains(r#"<link rel="canonical""#));
        assert!(html.contains("<body></body>"));
    }
}
