use crate::index::page::Page;
use crate::index::section::Section;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_DOCUMENTATION_FOLDER: &str = "documentation";
pub const DEFAULT_MANUALS_FOLDER: &str = "man";
pub const DEFAULT_CACHE_FILE: &str = "pages.json";

/// Where manual page sources live: `root/documentation_folder/manuals_folder/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualLayout {
    pub root: PathBuf,
    pub documentation_folder: String,
    pub manuals_folder: String,
}

impl ManualLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            documentation_folder: DEFAULT_DOCUMENTATION_FOLDER.to_string(),
            manuals_folder: DEFAULT_MANUALS_FOLDER.to_string(),
        }
    }

    pub fn documentation_dir(&self) -> PathBuf {
        self.root.join(&self.documentation_folder)
    }

    /// The flat directory holding one file per page.
    pub fn manuals_dir(&self) -> PathBuf {
        self.documentation_dir().join(&self.manuals_folder)
    }

    /// Default cache location. Sits next to the manuals folder, not inside it.
    pub fn default_cache_path(&self) -> PathBuf {
        self.documentation_dir().join(DEFAULT_CACHE_FILE)
    }
}

/// Ordered, read-only collection of pages for one invocation.
///
/// There is no secondary lookup structure; lookups scan in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageIndex {
    pages: Vec<Page>,
}

impl PageIndex {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Turn a flat title -> content mapping into pages without a section.
    pub fn from_packed(packed: PackedPages) -> Self {
        let pages = packed
            .entries
            .into_iter()
            .map(|(name, content)| Page::new(name, Section::None, content))
            .collect();
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

impl<'a> IntoIterator for &'a PageIndex {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

impl FromIterator<Page> for PageIndex {
    fn from_iter<I: IntoIterator<Item = Page>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

/// Flat title -> content mapping, the older cache shape.
///
/// Section metadata is lost in this form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedPages {
    entries: BTreeMap<String, String>,
}

impl PackedPages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a page, refusing to overwrite an existing key.
    ///
    /// Returns `false` if `key` is already packed; the map is left unchanged.
    pub fn insert(&mut self, key: String, content: String) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, content);
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Either shape a cache file may hold.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CacheContents {
    Pages(PageIndex),
    Packed(PackedPages),
}

impl From<CacheContents> for PageIndex {
    fn from(contents: CacheContents) -> Self {
        match contents {
            CacheContents::Pages(index) => index,
            CacheContents::Packed(packed) => PageIndex::from_packed(packed),
        }
    }
}

/// Resolve a user supplied cache path against the layout root when relative.
pub fn resolve_cache_path(layout: &ManualLayout, path: Option<&Path>) -> PathBuf {
    match path {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => layout.root.join(p),
        None => layout.default_cache_path(),
    }
}
