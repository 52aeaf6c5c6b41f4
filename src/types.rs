//! Navigation types shared by the top nav bar and the sidebar.
//!
//! These serialize directly into the generator's `themeConfig.nav` and
//! `themeConfig.sidebar` schema.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A navigation leaf: label plus site-relative link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A titled group of sidebar entries.
///
/// `collapsed: None` renders a fixed group; `Some(false)` a collapsible group
/// that starts open; `Some(true)` one that starts closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    pub items: Vec<SidebarItem>,
}

/// Entry of a sidebar group: a link or a nested group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    Link(NavItem),
    Section(NavSection),
}

impl From<NavItem> for SidebarItem {
    fn from(item: NavItem) -> Self {
        SidebarItem::Link(item)
    }
}

impl From<NavSection> for SidebarItem {
    fn from(section: NavSection) -> Self {
        SidebarItem::Section(section)
    }
}

/// Sidebar trees keyed by URL path prefix, in insertion order.
///
/// The generator picks the first prefix matching the current page, so order
/// is preserved in serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarMap {
    entries: Vec<(String, Vec<NavSection>)>,
}

impl SidebarMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tree for `prefix`, replacing any existing tree for it in place.
    pub fn insert(&mut self, prefix: impl Into<String>, sections: Vec<NavSection>) {
        let prefix = prefix.into();
        match self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            Some((_, existing)) => *existing = sections,
            None => self.entries.push((prefix, sections)),
        }
    }

    pub fn get(&self, prefix: &str) -> Option<&[NavSection]> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, sections)| sections.as_slice())
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavSection])> {
        self.entries
            .iter()
            .map(|(p, sections)| (p.as_str(), sections.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every leaf link under every prefix, depth-first in rendering order.
    pub fn links(&self) -> Vec<&NavItem> {
        let mut links = Vec::new();
        for (_, sections) in &self.entries {
            for section in sections {
                collect_links(&section.items, &mut links);
            }
        }
        links
    }
}

fn collect_links<'a>(items: &'a [SidebarItem], out: &mut Vec<&'a NavItem>) {
    for item in items {
        match item {
            SidebarItem::Link(link) => out.push(link),
            SidebarItem::Section(section) => collect_links(&section.items, out),
        }
    }
}

impl Serialize for SidebarMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prefix, sections) in &self.entries {
            map.serialize_entry(prefix, sections)?;
        }
        map.end()
    }
}
