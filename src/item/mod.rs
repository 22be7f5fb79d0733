// Item module
//
// This module provides the item templates held by inventories:
// - Item definition and the empty sentinel
// - Item registry loaded from JSON or built-in defaults

pub mod definition;
pub mod error;
pub mod registry;

// Re-export main types for convenient access
pub use definition::{EMPTY_ITEM, Item};
pub use error::ItemError;
pub use registry::ItemRegistry;
