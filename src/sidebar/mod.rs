//! Per-locale sidebar trees.
//!
//! Trees are static content built on demand. Only the Simplified Chinese
//! course has a sidebar so far; every other locale (and any unknown code)
//! gets an empty map until its content is translated.
//!
//! Links are site-relative and are not checked against the content tree.
//! Dead-link detection belongs to the generator, and the emitted config
//! switches it off.

mod zh_cn;

use crate::types::{NavItem, NavSection, SidebarItem, SidebarMap};

/// Sidebar for `locale`; empty for locales without one.
pub fn build_sidebar(locale: &str) -> SidebarMap {
    match locale {
        "zh-cn" => zh_cn::sidebar(),
        _ => SidebarMap::new(),
    }
}

/// Collapsible group that starts open.
fn open(text: &str, items: &[(&str, &str)]) -> NavSection {
    NavSection {
        collapsed: Some(false),
        ..fixed(text, items)
    }
}

/// Non-collapsible group.
fn fixed(text: &str, items: &[(&str, &str)]) -> NavSection {
    NavSection {
        text: text.to_string(),
        collapsed: None,
        items: items
            .iter()
            .map(|(text, link)| SidebarItem::Link(NavItem::new(*text, *link)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::locales;

    #[test]
    fn unknown_locale_is_empty() {
        assert!(build_sidebar("xx-yy").is_empty());
    }

    #[test]
    fn untranslated_locales_are_empty() {
        for entry in locales().iter().filter(|e| e.code != "zh-cn") {
            assert!(build_sidebar(entry.code).is_empty(), "{}", entry.code);
        }
    }

    #[test]
    fn every_link_is_site_relative() {
        for entry in locales() {
            for item in build_sidebar(entry.code).links() {
                assert!(item.link.starts_with('/'), "bad link {}", item.link);
                assert!(!item.link.contains(' '), "bad link {}", item.link);
            }
        }
    }

    #[test]
    fn open_and_fixed_groups() {
        let g = open("G", &[("a", "/a")]);
        assert_eq!(g.collapsed, Some(false));
        assert_eq!(g.items, vec![SidebarItem::Link(NavItem::new("a", "/a"))]);
        assert_eq!(fixed("F", &[]).collapsed, None);
    }
}
