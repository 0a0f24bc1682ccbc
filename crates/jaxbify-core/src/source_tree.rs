//! Filesystem seam used by the annotators.
//!
//! The annotation engine only ever lists, reads, writes and checks for files.
//! [`DiskTree`] does that against the real filesystem, [`DryRunTree`] turns
//! writes into log lines, and [`MemoryTree`] keeps everything in memory.

use crate::error::{AnnotateError, AnnotateResult};
use crate::patterns::SOURCE_EXTENSION;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Access to a tree of Java sources.
pub trait SourceTree {
    /// Java source files directly inside `dir`, sorted by path.
    fn list_source_files(&self, dir: &Path) -> AnnotateResult<Vec<PathBuf>>;

    /// Full text of a file.
    fn read_text(&self, path: &Path) -> AnnotateResult<String>;

    /// Create or fully overwrite a file.
    fn write_text(&self, path: &Path, content: &str) -> AnnotateResult<()>;

    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SOURCE_EXTENSION))
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskTree;

impl DiskTree {
    pub fn new() -> Self {
        Self
    }
}

impl SourceTree for DiskTree {
    fn list_source_files(&self, dir: &Path) -> AnnotateResult<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| AnnotateError::io(dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| AnnotateError::io(dir, e))?.path();
            if path.is_file() && is_source_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_text(&self, path: &Path) -> AnnotateResult<String> {
        fs::read_to_string(path).map_err(|e| AnnotateError::io(path, e))
    }

    fn write_text(&self, path: &Path, content: &str) -> AnnotateResult<()> {
        fs::write(path, content).map_err(|e| AnnotateError::io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Wraps a tree so that every write is reported instead of performed.
///
/// Listing and reading go to the inner tree. Paths whose write was skipped
/// count as existing afterwards, so a dry run makes exactly the decisions a
/// real run would.
#[derive(Debug, Default)]
pub struct DryRunTree<T> {
    inner: T,
    suppressed: AtomicUsize,
    pending: RwLock<BTreeSet<PathBuf>>,
}

impl<T: SourceTree> DryRunTree<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            suppressed: AtomicUsize::new(0),
            pending: RwLock::new(BTreeSet::new()),
        }
    }

    /// Number of writes that were skipped.
    pub fn suppressed_writes(&self) -> usize {
        self.suppressed.load(Ordering::SeqCst)
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: SourceTree> SourceTree for DryRunTree<T> {
    fn list_source_files(&self, dir: &Path) -> AnnotateResult<Vec<PathBuf>> {
        self.inner.list_source_files(dir)
    }

    fn read_text(&self, path: &Path) -> AnnotateResult<String> {
        self.inner.read_text(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> AnnotateResult<()> {
        self.suppressed.fetch_add(1, Ordering::SeqCst);
        self.pending.write().insert(path.to_path_buf());
        info!(path = %path.display(), bytes = content.len(), "dry run: would write file");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path) || self.pending.read().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }
}

/// In-memory tree of sources, keyed by path.
#[derive(Debug, Default)]
pub struct MemoryTree {
    files: RwLock<BTreeMap<PathBuf, String>>,
    dirs: RwLock<BTreeSet<PathBuf>>,
    writes: AtomicUsize,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty directory.
    pub fn add_dir(&self, dir: impl Into<PathBuf>) {
        self.dirs.write().insert(dir.into());
    }

    /// Seed a file without counting it as a write; its parent becomes a directory.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.dirs.write().insert(parent.to_path_buf());
        }
        self.files.write().insert(path, content.into());
    }

    /// Current content of a file.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.read().get(path.as_ref()).cloned()
    }

    /// Number of `write_text` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// All file paths currently held.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.read().keys().cloned().collect()
    }
}

impl SourceTree for MemoryTree {
    fn list_source_files(&self, dir: &Path) -> AnnotateResult<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(AnnotateError::io(
                dir,
                io::Error::new(io::ErrorKind::NotFound, "no such directory"),
            ));
        }
        Ok(self
            .files
            .read()
            .keys()
            .filter(|path| path.parent() == Some(dir) && is_source_file(path))
            .cloned()
            .collect())
    }

    fn read_text(&self, path: &Path) -> AnnotateResult<String> {
        self.get(path).ok_or_else(|| {
            AnnotateError::io(path, io::Error::new(io::ErrorKind::NotFound, "no such file"))
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> AnnotateResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.insert(path, content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.read().contains(path)
    }
}
