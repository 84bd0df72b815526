//! Manual section catalog.
//!
//! Sections are identified by their code (`1`, `3p`, `2type`, ...). The named
//! variants cover the sections shipped with the Linux man-pages project; any
//! other code is kept verbatim in [`Section::Other`] so newer trees still index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A section of the manual.
///
/// Two sections are equal when their codes are equal ignoring ASCII case.
/// [`Section::None`] is the empty code and stands for "no section filter" or
/// "section unknown".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Section {
    #[default]
    None,
    Header,
    Command,
    PosixCommand,
    SystemCall,
    SystemType,
    SystemConstant,
    LibraryCall,
    PosixLibraryCall,
    ExtendedLibraryCall,
    LibraryConstant,
    LibraryType,
    LibraryHeader,
    SpecialFiles,
    FileFormats,
    Miscellaneous,
    Overview,
    Administration,
    Other(String),
}

impl Section {
    /// Every named section, in manual order.
    pub const CATALOG: [Section; 17] = [
        Section::Header,
        Section::Command,
        Section::PosixCommand,
        Section::SystemCall,
        Section::SystemType,
        Section::SystemConstant,
        Section::LibraryCall,
        Section::PosixLibraryCall,
        Section::ExtendedLibraryCall,
        Section::LibraryConstant,
        Section::LibraryType,
        Section::LibraryHeader,
        Section::SpecialFiles,
        Section::FileFormats,
        Section::Miscellaneous,
        Section::Overview,
        Section::Administration,
    ];

    /// Classify a raw section code.
    ///
    /// The code is trimmed and matched ignoring case, so `" 3P "` is
    /// [`Section::PosixLibraryCall`]. Unknown codes become [`Section::Other`]
    /// with their original spelling.
    pub fn classify(code: &str) -> Self {
        let code = code.trim();
        match code.to_ascii_lowercase().as_str() {
            "" => Section::None,
            "0p" => Section::Header,
            "1" => Section::Command,
            "1p" => Section::PosixCommand,
            "2" => Section::SystemCall,
            "2type" => Section::SystemType,
            "2const" => Section::SystemConstant,
            "3" => Section::LibraryCall,
            "3p" => Section::PosixLibraryCall,
            "3x" => Section::ExtendedLibraryCall,
            "3const" => Section::LibraryConstant,
            "3type" => Section::LibraryType,
            "3head" => Section::LibraryHeader,
            "4" => Section::SpecialFiles,
            "5" => Section::FileFormats,
            "6" => Section::Miscellaneous,
            "7" => Section::Overview,
            "8" => Section::Administration,
            _ => Section::Other(code.to_string()),
        }
    }

    /// The section code as it appears in file names.
    pub fn code(&self) -> &str {
        match self {
            Section::None => "",
            Section::Header => "0p",
            Section::Command => "1",
            Section::PosixCommand => "1p",
            Section::SystemCall => "2",
            Section::SystemType => "2type",
            Section::SystemConstant => "2const",
            Section::LibraryCall => "3",
            Section::PosixLibraryCall => "3p",
            Section::ExtendedLibraryCall => "3x",
            Section::LibraryConstant => "3const",
            Section::LibraryType => "3type",
            Section::LibraryHeader => "3head",
            Section::SpecialFiles => "4",
            Section::FileFormats => "5",
            Section::Miscellaneous => "6",
            Section::Overview => "7",
            Section::Administration => "8",
            Section::Other(code) => code,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Section::None)
    }

    /// One-line description of what the section holds.
    pub fn description(&self) -> &'static str {
        match self {
            Section::None => "No section",
            Section::Header => "Header files within the POSIX standard",
            Section::Command => "User commands",
            Section::PosixCommand => "User commands within the POSIX standard",
            Section::SystemCall => "System calls",
            Section::SystemType => "Structures used with system calls",
            Section::SystemConstant => "Constants used with system calls",
            Section::LibraryCall => "Library functions and subroutines",
            Section::PosixLibraryCall => "POSIX library functions",
            Section::ExtendedLibraryCall => "Extended or non-standard library functions",
            Section::LibraryConstant => "Library constants, macros and defined types",
            Section::LibraryType => "Structures used with the standard library",
            Section::LibraryHeader => "Library header files",
            Section::SpecialFiles => "Special files and device drivers",
            Section::FileFormats => "File formats, conventions and configuration files",
            Section::Miscellaneous => "Games and amusements",
            Section::Overview => "Overviews, conventions, protocols and character sets",
            Section::Administration => "System administration commands",
            Section::Other(_) => "Unrecognized section",
        }
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.code().eq_ignore_ascii_case(other.code())
    }
}

impl Eq for Section {}

impl Hash for Section {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.code().bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl From<String> for Section {
    fn from(code: String) -> Self {
        Section::classify(&code)
    }
}

impl From<&str> for Section {
    fn from(code: &str) -> Self {
        Section::classify(code)
    }
}

impl From<Section> for String {
    fn from(section: Section) -> Self {
        section.code().to_string()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
