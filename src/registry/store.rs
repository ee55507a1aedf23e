//! Registry storage abstraction
//!
//! The updater takes a storage handle instead of touching the filesystem
//! directly, so its merge logic is testable without real files. The file
//! store reads the whole registry, and writes it back whole: no partial
//! writes, no locking. Callers serialize concurrent invocations.

use std::fs;
use std::path::{Path, PathBuf};

use super::Registry;
use crate::error::{PlugregError, Result};

/// Read/write access to a persisted registry
pub trait RegistryStore {
    /// Load the registry; a missing backing file yields an empty registry
    fn read(&self) -> Result<Registry>;

    /// Persist the registry in full
    fn write(&self, registry: &Registry) -> Result<()>;
}

/// Registry persisted as a JSON file
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistryStore for FileStore {
    fn read(&self) -> Result<Registry> {
        if !self.path.exists() {
            return Ok(Registry::new());
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| PlugregError::RegistryReadFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        serde_json::from_str(&content).map_err(|e| PlugregError::RegistryParseFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn write(&self, registry: &Registry) -> Result<()> {
        // 2-space indentation, UTF-8 written literally, trailing newline
        let mut content = serde_json::to_string_pretty(registry)?;
        content.push('\n');
        fs::write(&self.path, content).map_err(|e| PlugregError::RegistryWriteFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// In-memory store for tests
#[cfg(test)]
pub struct MemoryStore {
    registry: std::cell::RefCell<Registry>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: std::cell::RefCell::new(registry),
        }
    }

    pub fn snapshot(&self) -> Registry {
        self.registry.borrow().clone()
    }
}

#[cfg(test)]
impl RegistryStore for MemoryStore {
    fn read(&self) -> Result<Registry> {
        Ok(self.registry.borrow().clone())
    }

    fn write(&self, registry: &Registry) -> Result<()> {
        *self.registry.borrow_mut() = registry.clone();
        Ok(())
    }
}
