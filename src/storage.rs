//! Persistence layer for the task list
//!
//! [`PersistenceStore`] is the port the controller writes through after each
//! list mutation. [`FileStore`] keeps the list in one file (TOML, or JSON when
//! the file name ends in `.json`); [`MemoryStore`] keeps the serialized text
//! in memory.

use crate::todo::TaskList;
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait PersistenceStore {
    /// Read the stored list
    ///
    /// `Ok(None)` when nothing has been stored; `Err` when something is
    /// stored but cannot be read or parsed.
    fn load(&self) -> Result<Option<TaskList>>;

    fn save(&self, list: &TaskList) -> Result<()>;

    /// Remove the stored list entirely
    fn clear(&self) -> Result<()>;
}

/// Encoding of a storage file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    Toml,
    Json,
}

impl StorageFormat {
    /// Pick the format from the file extension (TOML unless `.json`)
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StorageFormat::Json,
            _ => StorageFormat::Toml,
        }
    }

    pub fn encode(&self, list: &TaskList) -> Result<String> {
        let content = match self {
            StorageFormat::Toml => toml::to_string_pretty(list)?,
            StorageFormat::Json => serde_json::to_string_pretty(list)?,
        };
        Ok(content)
    }

    pub fn decode(&self, content: &str) -> Result<TaskList> {
        let list = match self {
            StorageFormat::Toml => toml::from_str(content)?,
            StorageFormat::Json => serde_json::from_str(content)?,
        };
        Ok(list)
    }
}

pub struct FileStore {
    file_path: PathBuf,
    format: StorageFormat,
}

impl FileStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let format = StorageFormat::for_path(&file_path);
        Self { file_path, format }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }
}

impl PersistenceStore for FileStore {
    fn load(&self) -> Result<Option<TaskList>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let list = self
            .format
            .decode(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        Ok(Some(list))
    }

    fn save(&self, list: &TaskList) -> Result<()> {
        let content = self.format.encode(list)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), tasks = list.len(), "saved task list");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.file_path) {
            Ok(()) => {
                debug!(path = %self.file_path.display(), "removed task list file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove {}", self.file_path.display())),
        }
    }
}

/// In-memory store holding the serialized TOML text
#[derive(Debug, Default)]
pub struct MemoryStore {
    content: RefCell<Option<String>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored text, which need not be valid
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(Some(content.into())),
            writes: RefCell::new(0),
        }
    }

    /// The currently stored text, if any
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Number of `save` and `clear` calls so far
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl PersistenceStore for MemoryStore {
    fn load(&self) -> Result<Option<TaskList>> {
        match self.content.borrow().as_deref() {
            Some(content) => Ok(Some(StorageFormat::Toml.decode(content)?)),
            None => Ok(None),
        }
    }

    fn save(&self, list: &TaskList) -> Result<()> {
        let content = StorageFormat::Toml.encode(list)?;
        *self.content.borrow_mut() = Some(content);
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.content.borrow_mut() = None;
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

impl<S: PersistenceStore + ?Sized> PersistenceStore for &S {
    fn load(&self) -> Result<Option<TaskList>> {
        (**self).load()
    }

    fn save(&self, list: &TaskList) -> Result<()> {
        (**self).save(list)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
