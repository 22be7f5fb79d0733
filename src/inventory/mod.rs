// Inventory module
//
// This module provides the hotbar inventory, including:
// - Fixed-size slot storage with an equipped slot
// - Change notifications for UI and held-item rendering
// - Error types for rejected operations

pub mod error;
pub mod events;
pub mod slots;

// Re-export main types
pub use error::InventoryError;
pub use events::{InventoryEvent, SubscriptionId};
pub use slots::{DEFAULT_CAPACITY, SlotContents, SlotInventory, StepDirection};
