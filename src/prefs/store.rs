use std::collections::HashMap;

use super::error::PrefsError;

/// String-valued settings keyed by name
///
/// Key bindings are the only thing persisted this way. Readers always
/// supply a fallback, so a missing key is never an error.
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String>;

    fn set_string(&mut self, key: &str, value: &str);

    /// Removes a key, returning true if it was present
    fn delete_key(&mut self, key: &str) -> bool;

    fn has_key(&self, key: &str) -> bool {
        self.get_string(key).is_some()
    }

    /// Value for `key`, or `default` when unset
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|| default.to_string())
    }

    /// Persists pending changes; stores without backing storage do nothing
    fn flush(&mut self) -> Result<(), PrefsError> {
        Ok(())
    }
}

/// Preferences that live only for the current process
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn delete_key(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }
}
