use crate::error::{ManError, Result};
use crate::index::types::{CacheContents, PageIndex};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a cache file written by [`crate::index::writer`].
///
/// Both the ordered page array and the flat title -> content object are
/// accepted; the flat form comes back as pages without a section.
pub fn load_cache(path: &Path) -> Result<PageIndex> {
    let file = File::open(path).map_err(|err| ManError::io(path, err))?;
    let contents: CacheContents =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ManError::Cache {
            path: path.to_path_buf(),
            source,
        })?;

    let shape = match contents {
        CacheContents::Pages(_) => "pages",
        CacheContents::Packed(_) => "packed",
    };
    let index = PageIndex::from(contents);
    debug!(
        "loaded {} {} entries from {}",
        index.len(),
        shape,
        path.display()
    );

    Ok(index)
}
