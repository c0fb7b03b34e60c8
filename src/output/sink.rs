//! Destinations for the rendered script.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where finalization puts its output.
///
/// Only the three primitives the backup-and-replace sequence needs.
pub trait OutputSink {
    /// Whether something already exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create or truncate `path` with `contents`.
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;

    /// Move `from` to `to`.
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Sink backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

impl OutputSink for FsSink {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

/// In-memory sink for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, as if it existed before the run.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Contents at `path`, if any.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// All stored paths, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }
}

impl OutputSink for MemorySink {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        let contents = self.files.remove(from).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", from.display()),
            )
        })?;
        self.files.insert(to.to_path_buf(), contents);
        Ok(())
    }
}
