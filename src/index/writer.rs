use crate::error::{ManError, Result};
use crate::index::types::{PackedPages, PageIndex};
use log::debug;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Persist an ordered page index as a JSON array.
pub fn save_pages(path: &Path, index: &PageIndex) -> Result<()> {
    write_json(path, index)?;
    debug!("wrote {} pages to {}", index.len(), path.display());
    Ok(())
}

/// Persist a flat title -> content mapping as a JSON object.
pub fn save_packed(path: &Path, packed: &PackedPages) -> Result<()> {
    write_json(path, packed)?;
    debug!("wrote {} packed pages to {}", packed.len(), path.display());
    Ok(())
}

/// Write to a sibling temp file, then rename over the target.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| ManError::io(parent, err))?;
    }

    let tmp_path = temp_path(path);
    if let Err(err) = write_temp(path, &tmp_path, value) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    fs::rename(&tmp_path, path).map_err(|err| ManError::io(path, err))
}

fn write_temp<T: Serialize>(path: &Path, tmp_path: &Path, value: &T) -> Result<()> {
    let file = File::create(tmp_path).map_err(|err| ManError::io(tmp_path, err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| ManError::Cache {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|err| ManError::io(tmp_path, err))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
