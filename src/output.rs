//! Terminal output for lookup results

use crate::index::page::Page;
use crate::index::section::Section;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a page's raw content, exactly as stored.
pub fn print_page(page: &Page) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(page.content.as_bytes())?;
    stdout.flush()
}

/// Print one `name(section)` line per page.
pub fn print_page_list(pages: &[&Page], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    for page in pages {
        write_page_name(&mut stdout, page)?;
        writeln!(stdout)?;
    }
    Ok(())
}

/// Print the section catalog with descriptions.
pub fn print_sections(choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    for section in Section::CATALOG.iter() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:8}", section.code())?;
        stdout.reset()?;
        writeln!(stdout, " {}", section.description())?;
    }
    Ok(())
}

fn write_page_name(out: &mut impl WriteColor, page: &Page) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "{}", page.name)?;
    out.reset()?;
    if !page.section.is_none() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "({})", page.section)?;
        out.reset()?;
    }
    Ok(())
}
