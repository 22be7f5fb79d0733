//! Hotbar inventory for Project Borderland
//!
//! - `item`: item templates, the empty sentinel and the item catalog
//! - `inventory`: the fixed-size slot inventory and its change notifications
//! - `input`: key names, rebindable controls and input-to-action mapping
//! - `prefs`: persisted string preferences (key bindings)
//! - `config`: session configuration
//! - `session`: the application root that owns everything above
//! - `console`: text commands for driving a session from a terminal

pub mod config;
pub mod console;
pub mod input;
pub mod inventory;
pub mod item;
pub mod prefs;
pub mod session;

pub use inventory::{InventoryError, InventoryEvent, SlotInventory, StepDirection};
pub use item::{Item, ItemRegistry};
pub use session::Session;
