//! # mandex - Manual Page Index
//!
//! mandex indexes a directory of manual page sources (files named like
//! `ls(1)` or `printf(3p)`) and answers lookups by title, by section, or by
//! title within a section. The index can be cached as JSON so later lookups
//! skip the scan.
//!
//! ## Architecture
//!
//! - [`index`] - Section catalog, file name parsing, scanning and the JSON cache
//! - [`query`] - Title and section lookups over an index
//! - [`output`] - Terminal rendering of lookup results
//! - [`utils`] - Configuration, filesystem access and progress display
//! - [`error`] - Error type shared by the library
//!
//! ## Quick Start
//!
//! ```no_run
//! use mandex::index::{scan_manuals, ManualLayout, ScanOptions, Section};
//! use mandex::query::{find_by_title, find_by_title_in_section};
//! use mandex::utils::LocalFs;
//!
//! let layout = ManualLayout::new("/srv/project");
//! let index = scan_manuals(&LocalFs, &layout, ScanOptions::default()).unwrap();
//!
//! let page = find_by_title(&index, "ls").unwrap();
//! println!("{}", page.content);
//!
//! let admin = find_by_title_in_section(&index, "ls", &Section::Administration).unwrap();
//! println!("{}", admin.display_name());
//! ```

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{ManError, Result};
