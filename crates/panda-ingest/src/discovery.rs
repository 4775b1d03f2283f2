//! Working-directory file discovery.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{IngestError, Result};

/// A county extract or load file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyFile {
    /// Path to the file.
    pub path: PathBuf,
    /// Three-letter county code taken from the file name.
    pub code: String,
}

/// Lists regular files in a directory, skipping dot-files.
///
/// Returns files sorted by filename.
pub fn list_data_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_none_or(|name| name.starts_with('.'));
        if !hidden {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// The first three characters of a file name (`HIL_20250630.txt` -> `HIL`).
pub fn file_prefix(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let prefix: String = name.chars().take(3).collect();
    (prefix.chars().count() == 3).then_some(prefix)
}

/// Files in `dir` whose three-letter prefix passes `accept`.
///
/// Files with other prefixes are logged and skipped.
pub fn discover_county_files<F>(dir: &Path, accept: F) -> Result<Vec<CountyFile>>
where
    F: Fn(&str) -> bool,
{
    let mut matched = Vec::new();
    for path in list_data_files(dir)? {
        match file_prefix(&path) {
            Some(code) if accept(&code) => matched.push(CountyFile { path, code }),
            _ => warn!(path = %path.display(), "skipping file without a county prefix"),
        }
    }
    Ok(matched)
}
