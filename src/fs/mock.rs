// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Entry {
    File(Vec<u8>),
    Dir(Vec<String>),
}

type Entries = HashMap<PathBuf, Entry>;

/// In-memory filesystem for tests.
///
/// Paths are used verbatim (no normalisation), so tests should build them the
/// same way the code under test does, e.g. `./src/sass/a.scss`.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<Entries>>,
    symlinks: Arc<Mutex<HashSet<PathBuf>>>,
    deny_read: Arc<Mutex<HashSet<PathBuf>>>,
    deny_write: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.entries
            .lock()
            .unwrap()
            .insert(PathBuf::from("."), Entry::Dir(Vec::new()));
        fs
    }

    /// Create (or replace) a file; missing parent directories appear too.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut entries = self.entries.lock().unwrap();
        entries.insert(path.to_path_buf(), Entry::File(content.into()));
        link_into_parent(&mut entries, path);
    }

    /// Create a directory entry that is a symlink. Walking into it is up to
    /// the caller; the mock only reports it through `is_symlink`.
    pub fn add_symlinked_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        ensure_dir(&mut self.entries.lock().unwrap(), path);
        self.symlinks.lock().unwrap().insert(path.to_path_buf());
    }

    /// Make every read at or below `path` fail.
    pub fn deny_reads_under(&self, path: impl AsRef<Path>) {
        self.deny_read
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    /// Make every write at or below `path` fail.
    pub fn deny_writes_under(&self, path: impl AsRef<Path>) {
        self.deny_write
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    /// Contents of a file, if it exists.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.entries.lock().unwrap().get(path.as_ref()) {
            Some(Entry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }
}

fn denied(prefixes: &Mutex<HashSet<PathBuf>>, path: &Path) -> bool {
    prefixes.lock().unwrap().iter().any(|p| path.starts_with(p))
}

fn parent_of(path: &Path) -> Option<&Path> {
    let parent = path.parent()?;
    if parent.as_os_str().is_empty() {
        Some(Path::new("."))
    } else if parent == path {
        None
    } else {
        Some(parent)
    }
}

fn ensure_dir(entries: &mut Entries, path: &Path) {
    if entries.contains_key(path) {
        return;
    }
    entries.insert(path.to_path_buf(), Entry::Dir(Vec::new()));
    link_into_parent(entries, path);
}

/// Register `path` as a child of its parent directory, creating the parent
/// chain as needed.
fn link_into_parent(entries: &mut Entries, path: &Path) {
    let (Some(parent), Some(name)) = (parent_of(path), path.file_name().and_then(|n| n.to_str()))
    else {
        return;
    };
    ensure_dir(entries, parent);
    if let Some(Entry::Dir(children)) = entries.get_mut(parent) {
        if !children.iter().any(|c| c == name) {
            children.push(name.to_string());
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        if denied(&self.deny_read, path) {
            return Err(anyhow!("Permission denied: {:?}", path));
        }
        match self.entries.lock().unwrap().get(path) {
            Some(Entry::File(content)) => Ok(content.clone()),
            Some(Entry::Dir(_)) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if denied(&self.deny_write, path) {
            return Err(anyhow!("Permission denied: {:?}", path));
        }
        self.add_file(path, contents);
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.entries.lock().unwrap().get(path), Some(Entry::File(_)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.entries.lock().unwrap().get(path), Some(Entry::Dir(_)))
    }

    fn is_symlink(&self, path: &Path) -> bool {
        self.symlinks.lock().unwrap().contains(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        match self.entries.lock().unwrap().get(path) {
            Some(Entry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }
}
