//! Directory-backed key-value store.
//!
//! Each key is stored as `<key>.json` inside one directory opened through a
//! capability handle, so the store can never touch files outside it. Writes
//! go to a hidden temporary file first and are renamed into place.

use crate::board::ports::{KeyValueError, KeyValueResult, KeyValueStore};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

/// Key-value store persisting one JSON file per key.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    root: Utf8PathBuf,
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Opens the store rooted at `path`, creating the directory when needed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Backend`] when the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> KeyValueResult<Self> {
        let root = path.as_ref().to_path_buf();
        Dir::create_ambient_dir_all(&root, ambient_authority()).map_err(KeyValueError::backend)?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority()).map_err(KeyValueError::backend)?;
        Ok(Self { root, dir })
    }

    /// Returns the directory holding the stored files.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

fn file_name(key: &str) -> KeyValueResult<String> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if valid {
        Ok(format!("{key}.json"))
    } else {
        Err(KeyValueError::InvalidKey(key.to_owned()))
    }
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let name = file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let name = file_name(key)?;
        let staging = format!(".{name}.tmp");
        self.dir
            .write(&staging, value)
            .map_err(KeyValueError::backend)?;
        self.dir
            .rename(&staging, &self.dir, &name)
            .map_err(KeyValueError::backend)
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        let name = file_name(key)?;
        match self.dir.remove_file(&name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueError::backend(err)),
        }
    }
}
