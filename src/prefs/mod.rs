//! Persisted player preferences
//!
//! - `store`: the `PreferenceStore` trait and an in-memory store
//! - `file`: a JSON file store under the platform config directory
//! - `error`: load/save errors

pub mod error;
pub mod file;
pub mod store;

pub use error::PrefsError;
pub use file::JsonPreferences;
pub use store::{MemoryPreferences, PreferenceStore};
