//! Filesystem capability used by the scanner.
//!
//! The core only needs three primitives. [`LocalFs`] provides them on top of the
//! real filesystem; tests can swap in their own implementation.

use crate::error::{ManError, Result};
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::Path;

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub file_name: String,
    pub is_dir: bool,
}

pub trait FileSystem {
    /// List the direct children of `path`.
    fn list_directory(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Read a whole file.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Create `path` and any missing ancestors. Succeeds if it already exists.
    fn ensure_directory(&self, path: &Path) -> Result<()>;
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn list_directory(&self, path: &Path) -> Result<Vec<DirEntry>> {
        // No ignore rules: every entry in the manuals folder is a page source.
        let walker = WalkBuilder::new(path)
            .standard_filters(false)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let entry = result.map_err(|err| ManError::io(path, walk_error_to_io(err)))?;
            if entry.depth() == 0 {
                continue;
            }

            entries.push(DirEntry {
                file_name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type().map(|t| t.is_dir()).unwrap_or(false),
            });
        }

        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|err| ManError::io(path, err))
    }

    fn ensure_directory(&self, path: &Path) -> Result<()> {
        if path.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|err| ManError::io(path, err))
    }
}

fn walk_error_to_io(err: ignore::Error) -> io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other(message))
}
