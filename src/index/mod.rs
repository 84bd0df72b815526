pub mod build;
pub mod filename;
pub mod page;
pub mod reader;
pub mod section;
pub mod stats;
pub mod types;
pub mod writer;

pub use build::{pack_manuals, scan_manuals, ScanOptions};
pub use filename::{parse_filename, ParsedName};
pub use page::Page;
pub use reader::load_cache;
pub use section::Section;
pub use types::*;
pub use writer::{save_packed, save_pages};
