//! Named-blob key-value storage.
//!
//! The surrounding app persists everything as named JSON blobs; this module
//! is that boundary. `JsonFileStore` maps each name to one file in a
//! directory, `MemoryStore` backs tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KvError {
    #[error("could not read blob `{name}`: {source}")]
    Read { name: String, source: io::Error },
    #[error("could not write blob `{name}`: {source}")]
    Write { name: String, source: io::Error },
    #[error("invalid blob name `{0}`")]
    InvalidName(String),
}

/// get/set/remove on a named blob. No schema knowledge lives here.
pub trait KvStore {
    fn get(&self, name: &str) -> Result<Option<String>, KvError>;
    fn set(&self, name: &str, value: &str) -> Result<(), KvError>;
    fn remove(&self, name: &str) -> Result<(), KvError>;
}

/// One JSON file per blob under a base directory.
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, KvError> {
        // Blob names are identifiers, not paths.
        let valid = !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(KvError::InvalidName(name.to_string()));
        }
        Ok(self.base_dir.join(format!("{name}.json")))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, name: &str) -> Result<Option<String>, KvError> {
        let path = self.path_for(name)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(KvError::Read { name: name.to_string(), source }),
        }
    }

    fn set(&self, name: &str, value: &str) -> Result<(), KvError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.base_dir)
            .map_err(|source| KvError::Write { name: name.to_string(), source })?;
        fs::write(&path, value)
            .map_err(|source| KvError::Write { name: name.to_string(), source })
    }

    fn remove(&self, name: &str) -> Result<(), KvError> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(KvError::Write { name: name.to_string(), source }),
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<String>, KvError> {
        Ok(self.blobs.lock().expect("kv lock").get(name).cloned())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), KvError> {
        self.blobs.lock().expect("kv lock").insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), KvError> {
        self.blobs.lock().expect("kv lock").remove(name);
        Ok(())
    }
}
