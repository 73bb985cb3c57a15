//! On-disk backend: one JSON file per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{CacheError, KvStore};

const EXTENSION: &str = "json";

/// Key-value store keeping each key in `<dir>/<key>.json`.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| CacheError::OpenError(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CacheError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
            && !key.starts_with('.');
        if !valid {
            return Err(CacheError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", key, EXTENSION)))
    }
}

fn io_error(key: &str, source: io::Error) -> CacheError {
    CacheError::Io {
        key: key.to_string(),
        source,
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension(format!("{}.tmp", EXTENSION));
        fs::write(&tmp, value).map_err(|e| io_error(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| io_error(key, e))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.path_for(key)?.is_file())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| io_error("*", e))?;
        let mut keys = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| io_error("*", e))?.path();
            if path.extension().map_or(false, |e| e == EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
