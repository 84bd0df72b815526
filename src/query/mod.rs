pub mod executor;
pub mod parser;

pub use executor::{
    find_by_section, find_by_title, find_by_title_in_section, normalize_title, LookupExecutor,
    LookupResult,
};
pub use parser::Query;
