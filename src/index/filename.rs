//! Parsing of manual page file names such as `ls(1)` or `printf(3p)`.

use crate::error::{ManError, Result};

/// Identity cut from a manual page file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Page title as written in the file name (original case).
    pub name: String,
    /// Raw section code between the parentheses.
    pub section_code: String,
}

/// Parse a file name of the form `name(section)`.
///
/// Leading path separators are stripped when present; a bare file name is
/// accepted as is. The section code runs from the first `(` up to the next
/// `)` or the end of the string.
pub fn parse_filename(raw: &str) -> Result<ParsedName> {
    let stripped = raw.trim_start_matches(is_separator);

    let (name, rest) = stripped
        .split_once('(')
        .ok_or_else(|| ManError::MalformedName(format!("no '(' in '{}'", raw)))?;

    if name.trim().is_empty() {
        return Err(ManError::MalformedName(format!(
            "empty page name in '{}'",
            raw
        )));
    }

    let section_code = match rest.split_once(')') {
        Some((code, _)) => code,
        None => rest,
    };

    Ok(ParsedName {
        name: name.to_string(),
        section_code: section_code.to_string(),
    })
}

/// Key a page is packed under in the flat title -> content cache.
pub fn title_key(raw: &str) -> Result<String> {
    let parsed = parse_filename(raw)?;
    Ok(parsed.name.to_lowercase())
}

fn is_separator(c: char) -> bool {
    c == '/' || c == std::path::MAIN_SEPARATOR
}
