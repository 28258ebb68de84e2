//! Slot persistence - one JSON document per named slot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Durable storage for single-value slots.
///
/// A slot holds exactly one serialized value as a JSON document at
/// `<dir>/<slot>.json`. Every save is a full-file overwrite, not an append
/// or a diff. Loading a slot that has never been written reports `None` -
/// the normal first-run path.
#[derive(Debug, Clone)]
pub struct SlotStore {
    dir: PathBuf,
}

impl SlotStore {
    /// Create a store rooted at `dir`.
    ///
    /// The directory is created lazily on the first save, so constructing a
    /// store never touches the filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory this store writes under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    /// Serialize `value` into the slot, overwriting any prior content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the medium is unwritable and
    /// [`Error::Corrupt`] if the value does not serialize.
    pub fn save<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string_pretty(value).map_err(|source| Error::Corrupt {
            slot: slot.to_owned(),
            source,
        })?;

        let path = self.slot_path(slot);
        fs::write(&path, json)?;
        tracing::debug!(slot, path = %path.display(), "slot saved");
        Ok(())
    }

    /// Deserialize and return the slot's value, or `None` if the slot has
    /// never been written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read and
    /// [`Error::Corrupt`] if its contents do not decode. Slot absence is
    /// not an error.
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>> {
        let path = self.slot_path(slot);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Io(e)),
        };

        let value = serde_json::from_str(&json).map_err(|source| Error::Corrupt {
            slot: slot.to_owned(),
            source,
        })?;
        Ok(Some(value))
    }
}
