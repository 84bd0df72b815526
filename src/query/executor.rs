//! Lookup of pages by title, by section, or by title within a section.
//!
//! Every lookup is a plain linear scan over the index in order. A miss is
//! reported as [`ManError::NotFound`], including an empty section.

use crate::error::{ManError, Result};
use crate::index::page::Page;
use crate::index::section::Section;
use crate::index::types::PageIndex;
use crate::query::parser::Query;

/// Normalize a title for comparison: trim surrounding whitespace, lowercase.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// First page whose title matches `name`, ignoring case and surrounding whitespace.
///
/// When several pages share a title (e.g. `ls(1)` and `ls(8)`) the one that
/// comes first in the index wins.
pub fn find_by_title<'a>(index: &'a PageIndex, name: &str) -> Result<&'a Page> {
    first_by_title(index.iter(), name)
}

/// Every page in `section`, in index order.
pub fn find_by_section<'a>(index: &'a PageIndex, section: &Section) -> Result<Vec<&'a Page>> {
    let pages: Vec<&Page> = index.iter().filter(|p| &p.section == section).collect();

    if pages.is_empty() {
        return Err(ManError::NotFound(format!(
            "can not find pages with section '{}'",
            section
        )));
    }

    Ok(pages)
}

/// Title lookup narrowed to one section.
///
/// [`Section::None`] skips the narrowing and behaves like [`find_by_title`].
pub fn find_by_title_in_section<'a>(
    index: &'a PageIndex,
    name: &str,
    section: &Section,
) -> Result<&'a Page> {
    if section.is_none() {
        return find_by_title(index, name);
    }

    let pages = find_by_section(index, section)?;
    first_by_title(pages, name).map_err(|_| {
        ManError::NotFound(format!(
            "can not find page with name '{}' in section '{}'",
            name, section
        ))
    })
}

fn first_by_title<'a, I>(pages: I, name: &str) -> Result<&'a Page>
where
    I: IntoIterator<Item = &'a Page>,
{
    let needle = normalize_title(name);
    pages
        .into_iter()
        .find(|page| normalize_title(&page.name) == needle)
        .ok_or_else(|| ManError::NotFound(format!("can not find page with name '{}'", name)))
}

/// What a query resolved to.
#[derive(Debug)]
pub enum LookupResult<'a> {
    Page(&'a Page),
    Pages(Vec<&'a Page>),
}

/// Runs parsed queries against one index.
pub struct LookupExecutor<'a> {
    index: &'a PageIndex,
}

impl<'a> LookupExecutor<'a> {
    pub fn new(index: &'a PageIndex) -> Self {
        Self { index }
    }

    /// Dispatch on which parts of the query are set.
    pub fn execute(&self, query: &Query) -> Result<LookupResult<'a>> {
        match &query.title {
            Some(title) => {
                find_by_title_in_section(self.index, title, &query.section).map(LookupResult::Page)
            }
            None if !query.section.is_none() => {
                find_by_section(self.index, &query.section).map(LookupResult::Pages)
            }
            None => Err(ManError::NotFound(
                "a page title or a section is required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str, code: &str) -> Page {
        Page::new(name, Section::classify(code), format!("{}({}) content", name, code))
    }

    fn sample_index() -> PageIndex {
        PageIndex::new(vec![
            page("ls", "1"),
            page("cat", "1"),
            page("open", "2"),
            page("ls", "8"),
            page("Xorg", "1"),
        ])
    }

    #[test]
    fn test_title_is_case_and_whitespace_insensitive() {
        let index = sample_index();
        let a = find_by_title(&index, "  Ls  ").unwrap();
        let b = find_by_title(&index, "ls").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_title_matches_stored_uppercase() {
        let index = sample_index();
        assert_eq!(find_by_title(&index, "xorg").unwrap().name, "Xorg");
    }

    #[test]
    fn test_title_first_match_wins() {
        let index = sample_index();
        assert_eq!(find_by_title(&index, "ls").unwrap().section, Section::Command);
    }

    #[test]
    fn test_title_not_found() {
        let index = sample_index();
        assert!(find_by_title(&index, "grep").unwrap_err().is_not_found());
        assert!(find_by_title(&PageIndex::default(), "ls").unwrap_err().is_not_found());
    }

    #[test]
    fn test_section_keeps_order() {
        let index = PageIndex::new(vec![page("a", "1"), page("b", "1"), page("c", "2")]);
        let pages = find_by_section(&index, &Section::Command).unwrap();
        let names: Vec<_> = pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_section_is_not_found() {
        let index = PageIndex::new(vec![page("a", "1"), page("b", "1"), page("c", "2")]);
        let err = find_by_section(&index, &Section::classify("9")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_section_none_does_not_match_concrete() {
        let index = sample_index();
        assert!(find_by_section(&index, &Section::None).is_err());
    }

    #[test]
    fn test_qualified_picks_section() {
        let index = sample_index();
        let found = find_by_title_in_section(&index, "ls", &Section::Administration).unwrap();
        assert_eq!(found.section, Section::Administration);
        assert_eq!(found.content, "ls(8) content");
    }

    #[test]
    fn test_qualified_missing_title_in_section() {
        let index = sample_index();
        let err = find_by_title_in_section(&index, "cat", &Section::SystemCall).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_qualified_empty_section() {
        let index = sample_index();
        let err = find_by_title_in_section(&index, "ls", &Section::FileFormats).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_qualified_none_is_plain_title_search() {
        let index = sample_index();
        let found = find_by_title_in_section(&index, "ls", &Section::None).unwrap();
        assert_eq!(found.section, Section::Command);
    }

    #[test]
    fn test_executor_dispatch() {
        let index = sample_index();
        let executor = LookupExecutor::new(&index);

        let by_title = executor.execute(&Query::new(Some("cat"), None)).unwrap();
        assert!(matches!(by_title, LookupResult::Page(p) if p.name == "cat"));

        let by_section = executor.execute(&Query::new(None, Some("1"))).unwrap();
        assert!(matches!(by_section, LookupResult::Pages(ref p) if p.len() == 3));

        assert!(executor.execute(&Query::new(None, None)).is_err());
    }
}
