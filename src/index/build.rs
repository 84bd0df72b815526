use crate::error::{ManError, Result};
use crate::index::filename::title_key;
use crate::index::page::Page;
use crate::index::types::{ManualLayout, PackedPages, PageIndex};
use crate::utils::{scan_spinner, FileSystem};
use log::{debug, info};
use std::io;
use std::path::PathBuf;

/// Options for a scan of the manuals folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Suppress the progress spinner.
    pub silent: bool,
}

/// Scan the manuals folder and build a page for every file in it.
///
/// The folder is created if it does not exist yet. Any unreadable or
/// malformed file aborts the whole scan; no partial index is returned.
pub fn scan_manuals(
    fs: &dyn FileSystem,
    layout: &ManualLayout,
    options: ScanOptions,
) -> Result<PageIndex> {
    let files = list_page_files(fs, layout)?;
    let spinner = scan_spinner(options.silent, "Reading manual pages...");

    let mut pages = Vec::with_capacity(files.len());
    for path in &files {
        let page = Page::from_file(fs, path)?;
        debug!("indexed {} from {}", page.display_name(), path.display());
        pages.push(page);
        if let Some(ref sp) = spinner {
            sp.inc(1);
        }
    }

    if let Some(sp) = spinner {
        sp.finish_with_message(format!("Indexed {} pages", pages.len()));
    }
    info!(
        "scanned {} pages from {}",
        pages.len(),
        layout.manuals_dir().display()
    );

    Ok(PageIndex::new(pages))
}

/// Scan the manuals folder into a flat title -> content mapping.
///
/// Titles are lowercased; two files that share a title (for example the
/// same name in two sections) fail the pack with [`ManError::DuplicateKey`].
pub fn pack_manuals(
    fs: &dyn FileSystem,
    layout: &ManualLayout,
    options: ScanOptions,
) -> Result<PackedPages> {
    let files = list_page_files(fs, layout)?;
    let spinner = scan_spinner(options.silent, "Packing manual pages...");

    let mut packed = PackedPages::new();
    for path in &files {
        let content = fs.read_file(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let key = title_key(&file_name)?;

        let content = String::from_utf8_lossy(&content).into_owned();
        if !packed.insert(key.clone(), content) {
            return Err(ManError::DuplicateKey(format!(
                "can not pack page '{}' from {}",
                key,
                path.display()
            )));
        }
        if let Some(ref sp) = spinner {
            sp.inc(1);
        }
    }

    if let Some(sp) = spinner {
        sp.finish_with_message(format!("Packed {} pages", packed.len()));
    }

    Ok(packed)
}

/// Absolute paths of every page source, in listing order.
///
/// The manuals folder is flat; a directory inside it is not a page source
/// and fails the listing.
fn list_page_files(fs: &dyn FileSystem, layout: &ManualLayout) -> Result<Vec<PathBuf>> {
    let manuals_dir = layout.manuals_dir();
    fs.ensure_directory(&manuals_dir)?;

    let mut files = Vec::new();
    for entry in fs.list_directory(&manuals_dir)? {
        let path = manuals_dir.join(&entry.file_name);
        if entry.is_dir {
            return Err(ManError::io(
                path,
                io::Error::new(io::ErrorKind::IsADirectory, "page source is a directory"),
            ));
        }
        files.push(path);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::section::Section;
    use crate::utils::{DirEntry, LocalFs};
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::TempDir;

    const SILENT: ScanOptions = ScanOptions { silent: true };

    fn write_pages(layout: &ManualLayout, names: &[&str]) {
        let dir = layout.manuals_dir();
        fs::create_dir_all(&dir).unwrap();
        for name in names {
            fs::write(dir.join(name), format!(".TH {}\n", name)).unwrap();
        }
    }

    #[test]
    fn test_scan_builds_one_page_per_file() {
        let tmp = TempDir::new().unwrap();
        let layout = ManualLayout::new(tmp.path());
        write_pages(&layout, &["ls(1)", "open(2)", "printf(3p)"]);

        let index = scan_manuals(&LocalFs, &layout, SILENT).unwrap();
        assert_eq!(index.len(), 3);

        let names: Vec<_> = index.iter().map(|p| p.display_name()).collect();
        assert_eq!(names, vec!["ls(1)", "open(2)", "printf(3p)"]);
        assert_eq!(index.pages()[0].content, ".TH ls(1)\n");
    }

    #[test]
    fn test_scan_creates_missing_folder() {
        let tmp = TempDir::new().unwrap();
        let layout = ManualLayout::new(tmp.path());

        let index = scan_manuals(&LocalFs, &layout, SILENT).unwrap();
        assert!(index.is_empty());
        assert!(layout.manuals_dir().is_dir());
    }

    #[test]
    fn test_scan_aborts_on_malformed_name() {
        let tmp = TempDir::new().unwrap();
        let layout = ManualLayout::new(tmp.path());
        write_pages(&layout, &["ls(1)", "README"]);

        let err = scan_manuals(&LocalFs, &layout, SILENT).unwrap_err();
        assert!(matches!(err, ManError::MalformedName(_)));
    }

    #[test]
    fn test_scan_aborts_on_directory_entry() {
        let tmp = TempDir::new().unwrap();
        let layout = ManualLayout::new(tmp.path());
        write_pages(&layout, &["ls(1)"]);
        fs::create_dir(layout.manuals_dir().join("foo(1)")).unwrap();

        match scan_manuals(&LocalFs, &layout, SILENT).unwrap_err() {
            ManError::Io { path, source } => {
                assert_eq!(path, layout.manuals_dir().join("foo(1)"));
                assert_eq!(source.kind(), std::io::ErrorKind::IsADirectory);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_pack_aborts_on_directory_entry() {
        let tmp = TempDir::new().unwrap();
        let layout = ManualLayout::new(tmp.path());
        write_pages(&layout, &["ls(1)"]);
        fs::create_dir(layout.manuals_dir().join("drafts")).unwrap();

        let err = pack_manuals(&LocalFs, &layout, SILENT).unwrap_err();
        assert!(matches!(err, ManError::Io { .. }));
    }

    #[test]
    fn test_scan_keeps_duplicates() {
        let tmp = TempDir::new().unwrap();
        let layout = ManualLayout::new(tmp.path());
        write_pages(&layout, &["ls(1)", "LS(1)"]);

        let index = scan_manuals(&LocalFs, &layout, SILENT).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_scan_custom_folders() {
        let tmp = TempDir::new().unwrap();
        let mut layout = ManualLayout::new(tmp.path());
        layout.documentation_folder = "docs".to_string();
        layout.manuals_folder = "pages".to_string();
        write_pages(&layout, &["cat(1)"]);

        let index = scan_manuals(&LocalFs, &layout, SILENT).unwrap();
        assert_eq!(index.pages()[0].section, Section::Command);
        assert!(tmp.path().join("docs").join("pages").is_dir());
    }

    #[test]
    fn test_pack_rejects_duplicate_titles() {
        let tmp = TempDir::new().unwrap();
        let layout = ManualLayout::new(tmp.path());
        write_pages(&layout, &["ls(1)", "ls(8)"]);

        let err = pack_manuals(&LocalFs, &layout, SILENT).unwrap_err();
        assert!(matches!(err, ManError::DuplicateKey(_)));
    }

    #[test]
    fn test_pack_lowercases_keys() {
        let tmp = TempDir::new().unwrap();
        let layout = ManualLayout::new(tmp.path());
        write_pages(&layout, &["Xorg(1)", "ls(1)"]);

        let packed = pack_manuals(&LocalFs, &layout, SILENT).unwrap();
        assert_eq!(packed.len(), 2);
        assert_eq!(packed.get("xorg"), Some(".TH Xorg(1)\n"));
    }

    /// In-memory filesystem that fails reads for chosen files.
    struct FakeFs {
        files: HashMap<String, Vec<u8>>,
        unreadable: Vec<String>,
        created: Mutex<Vec<PathBuf>>,
    }

    impl FileSystem for FakeFs {
        fn list_directory(&self, _path: &Path) -> Result<Vec<DirEntry>> {
            let mut names: Vec<_> = self.files.keys().cloned().collect();
            names.sort();
            Ok(names
                .into_iter()
                .map(|file_name| DirEntry {
                    file_name,
                    is_dir: false,
                })
                .collect())
        }

        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            if self.unreadable.contains(&name) {
                return Err(ManError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                ));
            }
            Ok(self.files[&name].clone())
        }

        fn ensure_directory(&self, path: &Path) -> Result<()> {
            self.created.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_scan_aborts_on_unreadable_file() {
        let fake = FakeFs {
            files: HashMap::from([
                ("ls(1)".to_string(), b"ls".to_vec()),
                ("cat(1)".to_string(), b"cat".to_vec()),
            ]),
            unreadable: vec!["ls(1)".to_string()],
            created: Mutex::new(Vec::new()),
        };
        let layout = ManualLayout::new("/man-root");

        let err = scan_manuals(&fake, &layout, SILENT).unwrap_err();
        assert!(matches!(err, ManError::Io { .. }));
        assert_eq!(fake.created.lock().unwrap()[0], layout.manuals_dir());
    }
}
