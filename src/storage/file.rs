//! Directory-backed key-value store.

use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::Result;

/// Suffix of every file the store writes.
const SUFFIX: &str = ".rwd.json";
const TEMP_SUFFIX: &str = ".rwd.json.tmp";
/// Leading marker of hashed names. Plain keys never start with it.
const HASH_MARKER: char = '~';

/// Stores each key in its own file under a root directory.
///
/// Keys made only of ASCII letters, digits, `.`, `_` and `-` map to
/// `<key>.rwd.json`; any other key maps to `~<hash>.rwd.json` so it can never
/// escape the directory or collide with a plain key. Only files with the
/// `.rwd.json` suffix belong to the store.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the file path for a key.
    pub fn key_path(&self, key: &str) -> PathBuf {
        let name = if is_plain_key(key) {
            key.to_string()
        } else {
            let hash = Sha256::digest(key.as_bytes());
            format!("{}{}", HASH_MARKER, hex::encode(&hash[..16]))
        };
        self.root.join(format!("{}{}", name, SUFFIX))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        let mut path = self.key_path(key).into_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }

    /// Ensure the store directory exists.
    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

fn is_store_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SUFFIX) || name.ends_with(TEMP_SUFFIX))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a temp file and renames it over the target, so a key is
    /// never left half-written.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.key_path(key);
        let temp_path = self.temp_path(key);
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the store's own `.rwd.json` files and leftover temp files;
    /// anything else in the directory is left alone.
    fn clear(&mut self) -> Result<()> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let mut removed = 0usize;
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && is_store_file(&path) {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }

        tracing::debug!(root = %self.root.display(), removed, "File store cleared");
        Ok(())
    }
}
