use thiserror::Error;

/// Errors that can occur during inventory operations
///
/// None of these leave the inventory partially modified: a failed
/// operation changes no slot and fires no notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Slot index out of bounds
    #[error("Invalid slot index: {index} (capacity {capacity})")]
    InvalidSlot { index: usize, capacity: usize },

    /// Inventory is full (can't add more items)
    #[error("Inventory is full")]
    InventoryFull,

    /// The empty sentinel can't be stored as an item
    #[error("Cannot add the empty item")]
    EmptyItem,

    /// Inventories need at least one slot
    #[error("Inventory capacity must be at least 1")]
    ZeroCapacity,
}
