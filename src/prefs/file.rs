//! JSON-backed preference store
//!
//! Preferences are kept in a single human-readable file:
//!
//! ```json
//! { "version": 1, "values": { "throwKey": "G" } }
//! ```
//!
//! A file that can't be parsed is moved aside with a timestamped name and
//! the store starts empty, so a bad edit never blocks startup.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::PrefsError;
use super::store::PreferenceStore;

pub const CURRENT_PREFS_VERSION: u32 = 1;

const APP_DIR: &str = "project-borderland";
const PREFS_FILE: &str = "preferences.json";

#[derive(Debug, Serialize, Deserialize)]
struct PrefsFile {
    version: u32,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

#[derive(Debug)]
pub struct JsonPreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
    dirty: bool,
}

impl JsonPreferences {
    /// Platform location, e.g. `~/.config/project-borderland/preferences.json`
    pub fn default_path() -> Result<PathBuf, PrefsError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(PREFS_FILE))
            .ok_or(PrefsError::NoConfigDir)
    }

    /// Opens the store at `path`
    ///
    /// The file doesn't need to exist yet; it is created on `save`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            // Read raw bytes so invalid UTF-8 counts as corrupt, not as an IO failure
            let bytes = fs::read(&path)?;
            match serde_json::from_slice::<PrefsFile>(&bytes) {
                Ok(file) if file.version > CURRENT_PREFS_VERSION => {
                    return Err(PrefsError::InvalidVersion(file.version));
                }
                Ok(file) => file.values,
                Err(err) => {
                    let backup = backup_corrupt_file(&path)?;
                    log::warn!(
                        "Preferences at {} are unreadable ({}); moved to {} and using defaults",
                        path.display(),
                        err,
                        backup.display()
                    );
                    BTreeMap::new()
                }
            }
        } else {
            log::debug!("No preferences at {}, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(JsonPreferences {
            path,
            values,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when there are changes not yet written to disk
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes all values to disk, creating the parent directory if needed
    pub fn save(&mut self) -> Result<PathBuf, PrefsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = PrefsFile {
            version: CURRENT_PREFS_VERSION,
            values: self.values.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;
        self.dirty = false;

        log::info!("Preferences saved to: {}", self.path.display());
        Ok(self.path.clone())
    }
}

impl PreferenceStore for JsonPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if previous.as_deref() != Some(value) {
            self.dirty = true;
        }
    }

    fn delete_key(&mut self, key: &str) -> bool {
        let removed = self.values.remove(key).is_some();
        self.dirty |= removed;
        removed
    }

    fn flush(&mut self) -> Result<(), PrefsError> {
        if self.dirty {
            self.save()?;
        }
        Ok(())
    }
}

/// Renames an unreadable file to `<stem>.corrupt_<timestamp>.json`
fn backup_corrupt_file(path: &Path) -> Result<PathBuf, PrefsError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("preferences");
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let backup = path.with_file_name(format!("{}.corrupt_{}.json", stem, timestamp));

    fs::rename(path, &backup)?;
    Ok(backup)
}
