//! Storage backends for the three record collections
//!
//! The record store never touches the filesystem directly. It goes through a
//! [`RecordStorage`], which moves raw bytes for a [`Collection`]:
//!
//! - [`FileStorage`] keeps each collection in its own flat file
//! - [`InMemoryStorage`] keeps them in memory, for tests and benchmarks
//!
//! # Missing Collections
//!
//! A collection that has never been written loads as `None`. Callers treat
//! that as an empty sequence, not as an error.

use crate::types::PlantError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// The persisted record collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Bean batches, one line per batch
    Batches,
    /// Processing-stage events
    Processing,
    /// Operations audit trail
    Operations,
}

impl Collection {
    /// File name used when no explicit path is configured
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Collection::Batches => "bean_inventory.txt",
            Collection::Processing => "processing_records.txt",
            Collection::Operations => "operations_log.txt",
        }
    }
}

/// Byte-level access to the record collections
///
/// Implementations only move bytes; line parsing and formatting live in
/// `io::record_format`.
pub trait RecordStorage {
    /// Load the full contents of a collection
    ///
    /// Returns `Ok(None)` if the collection has never been written.
    fn load(&self, collection: Collection) -> Result<Option<Vec<u8>>, PlantError>;

    /// Append bytes to a collection, creating it if needed
    ///
    /// If the existing contents do not end with `\n`, one is written first so
    /// the appended bytes start on a new line.
    fn append(&self, collection: Collection, bytes: &[u8]) -> Result<(), PlantError>;

    /// Replace the full contents of a collection
    fn replace(&self, collection: Collection, bytes: &[u8]) -> Result<(), PlantError>;
}

/// Locations of the three record files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub inventory_path: PathBuf,
    pub processing_path: PathBuf,
    pub log_path: PathBuf,
}

impl StoreConfig {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        StoreConfig {
            inventory_path: dir.join(Collection::Batches.default_file_name()),
            processing_path: dir.join(Collection::Processing.default_file_name()),
            log_path: dir.join(Collection::Operations.default_file_name()),
        }
    }

    /// Path backing a collection
    pub fn path(&self, collection: Collection) -> &Path {
        match collection {
            Collection::Batches => &self.inventory_path,
            Collection::Processing => &self.processing_path,
            Collection::Operations => &self.log_path,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            inventory_path: PathBuf::from(Collection::Batches.default_file_name()),
            processing_path: PathBuf::from(Collection::Processing.default_file_name()),
            log_path: PathBuf::from(Collection::Operations.default_file_name()),
        }
    }
}

/// File-backed storage
///
/// Appends open the file in append mode. Replacements write a temporary file
/// in the target directory and rename it over the original, so a crash leaves
/// either the old or the new contents.
#[derive(Debug, Clone)]
pub struct FileStorage {
    config: StoreConfig,
}

impl FileStorage {
    pub fn new(config: StoreConfig) -> Self {
        FileStorage { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn ensure_parent(path: &Path) -> Result<PathBuf, PlantError> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                Ok(parent.to_path_buf())
            }
            _ => Ok(PathBuf::from(".")),
        }
    }

    /// Whether a non-empty file is missing its final line terminator
    fn lacks_final_newline(file: &mut File) -> Result<bool, PlantError> {
        let len = file.metadata()?.len();
        if len == 0 {
            return Ok(false);
        }
        file.seek(SeekFrom::Start(len - 1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}

impl RecordStorage for FileStorage {
    fn load(&self, collection: Collection) -> Result<Option<Vec<u8>>, PlantError> {
        let path = self.config.path(collection);
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "record file not found, treating as empty");
                Ok(None)
            }
            Err(e) => Err(PlantError::IoError {
                message: format!("Failed to read '{}': {}", path.display(), e),
            }),
        }
    }

    fn append(&self, collection: Collection, bytes: &[u8]) -> Result<(), PlantError> {
        let path = self.config.path(collection);
        Self::ensure_parent(path)?;

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)?;
        if Self::lacks_final_newline(&mut file)? {
            debug!(path = %path.display(), "record file lacks a final newline, adding one");
            file.write_all(b"\n")?;
        }
        file.write_all(bytes)?;
        file.flush()?;
        Ok(())
    }

    fn replace(&self, collection: Collection, bytes: &[u8]) -> Result<(), PlantError> {
        let path = self.config.path(collection);
        let dir = Self::ensure_parent(path)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| PlantError::from(e.error))?;
        Ok(())
    }
}

/// In-memory storage
///
/// Single-threaded; collections live in a `RefCell` so the shared-reference
/// trait methods can mutate them.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    collections: RefCell<HashMap<Collection, Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection with raw text
    pub fn with_contents(self, collection: Collection, contents: &str) -> Self {
        self.collections
            .borrow_mut()
            .insert(collection, contents.as_bytes().to_vec());
        self
    }

    /// Current raw text of a collection, if it was ever written
    pub fn contents(&self, collection: Collection) -> Option<String> {
        self.collections
            .borrow()
            .get(&collection)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl RecordStorage for InMemoryStorage {
    fn load(&self, collection: Collection) -> Result<Option<Vec<u8>>, PlantError> {
        Ok(self.collections.borrow().get(&collection).cloned())
    }

    fn append(&self, collection: Collection, bytes: &[u8]) -> Result<(), PlantError> {
        let mut collections = self.collections.borrow_mut();
        let contents = collections.entry(collection).or_default();
        if contents.last().is_some_and(|&last| last != b'\n') {
            contents.push(b'\n');
        }
        contents.extend_from_slice(bytes);
        Ok(())
    }

    fn replace(&self, collection: Collection, bytes: &[u8]) -> Result<(), PlantError> {
        self.collections
            .borrow_mut()
            .insert(collection, bytes.to_vec());
        Ok(())
    }
}
