use crate::error::{ManError, Result};
use crate::index::filename::parse_filename;
use crate::index::section::Section;
use crate::utils::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A manual page with its content and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Title as parsed from the file name. Original case is kept for display.
    pub name: String,
    pub section: Section,
    /// Raw source text of the page.
    pub content: String,
}

impl Page {
    pub fn new(name: impl Into<String>, section: Section, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section,
            content: content.into(),
        }
    }

    /// Build a page from a source file.
    ///
    /// The identity comes from the file name, the content from the file itself.
    /// Non UTF-8 bytes are replaced rather than rejected.
    pub fn from_file(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let bytes = fs.read_file(path)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ManError::MalformedName(format!("no file name in '{}'", path.display()))
            })?;
        let parsed = parse_filename(&file_name)?;

        Ok(Self {
            name: parsed.name,
            section: Section::classify(&parsed.section_code),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// `name(section)` as used in file names and listings.
    pub fn display_name(&self) -> String {
        format!("{}({})", self.name, self.section)
    }
}
