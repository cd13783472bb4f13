//! Key-value slots in local persistent storage.
//!
//! A slot holds one string under a name. Reading an absent slot is not an
//! error. Writing replaces whatever the slot held before.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub trait SlotStore {
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Slots stored as `<dir>/<key>.json` files.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

/// Slot names become file names, so they must stay a single path component.
pub fn validate_slot_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Slot name must not be empty");
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        bail!("Invalid slot name {name:?}: must not contain path separators");
    }
    Ok(())
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read slot {}", path.display()));
            }
        };

        // Undecodable content surfaces as a `FromUtf8Error` so callers can tell
        // it apart from an unreadable medium.
        let content = String::from_utf8(bytes)
            .with_context(|| format!("Slot {} is not valid UTF-8", path.display()))?;
        Ok(Some(content))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).with_context(|| {
                format!("Failed to create slot directory {}", self.dir.display())
            })?;
        }

        let path = self.slot_path(key);
        fs::write(&path, value)
            .with_context(|| format!("Failed to write slot {}", path.display()))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
