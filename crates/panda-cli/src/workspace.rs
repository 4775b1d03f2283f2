//! Working directories for one voter data year.
//!
//! ```text
//! <base>/<year>/VoterDetail/   raw county extracts
//! <base>/<year>/load/          sorted load files, one per county
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

pub const RAW_DIR: &str = "VoterDetail";
pub const LOAD_DIR: &str = "load";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    year_dir: PathBuf,
}

impl Workspace {
    pub fn new(base: &Path, year: i32) -> Self {
        Self {
            year_dir: base.join(year.to_string()),
        }
    }

    pub fn year_dir(&self) -> &Path {
        &self.year_dir
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.year_dir.join(RAW_DIR)
    }

    pub fn load_dir(&self) -> PathBuf {
        self.year_dir.join(LOAD_DIR)
    }

    /// Load file for a county code: `load/<CODE>.csv`.
    pub fn load_file(&self, code: &str) -> PathBuf {
        self.load_dir().join(format!("{code}.csv"))
    }

    /// Create any missing working directories.
    pub fn create_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(self.raw_dir())?;
        fs::create_dir_all(self.load_dir())
    }

    /// Remove load files left by an earlier run.
    pub fn clear_load_dir(&self) -> io::Result<usize> {
        empty_directory(&self.load_dir())
    }

    /// Remove raw extracts and load files. Returns the number removed.
    pub fn purge(&self) -> io::Result<usize> {
        Ok(empty_directory(&self.raw_dir())? + empty_directory(&self.load_dir())?)
    }
}

/// Delete the non-dot regular files in `dir`. A missing directory is empty.
fn empty_directory(dir: &Path) -> io::Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_none_or(|name| name.starts_with('.'));
        if path.is_file() && !hidden {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    debug!(dir = %dir.display(), removed, "emptied directory");
    Ok(removed)
}
