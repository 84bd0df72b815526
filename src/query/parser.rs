use crate::index::section::Section;

/// A lookup request: a title, a section, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub title: Option<String>,
    /// [`Section::None`] means no section filter.
    pub section: Section,
}

impl Query {
    /// Build a query from raw command line input.
    ///
    /// A blank title counts as no title. The section code is classified the
    /// same way file names are.
    pub fn new(title: Option<&str>, section: Option<&str>) -> Self {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string);
        let section = section.map(Section::classify).unwrap_or_default();

        Self { title, section }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.section.is_none()
    }
}
