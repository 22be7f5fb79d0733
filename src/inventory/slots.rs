use std::sync::Arc;

use super::error::InventoryError;
use super::events::{InventoryEvent, Listeners, SubscriptionId};
use crate::item::{EMPTY_ITEM, Item};

/// Number of slots used when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 8;

/// Direction for scrolling the equipped slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Next,
    Previous,
}

/// Slot storage plus the equipped index
///
/// This is the read-only half of the inventory. Listeners receive it during
/// dispatch so they can look up icons and prefabs without holding the store.
#[derive(Debug, Clone)]
pub struct SlotContents {
    /// Slots that can hold an item (None = empty)
    slots: Vec<Option<Arc<Item>>>,

    /// Currently selected slot (always < slots.len())
    equipped_index: usize,
}

impl SlotContents {
    fn new(capacity: usize) -> Self {
        SlotContents {
            slots: vec![None; capacity],
            equipped_index: 0,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), InventoryError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(InventoryError::InvalidSlot {
                index,
                capacity: self.slots.len(),
            })
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn equipped_index(&self) -> usize {
        self.equipped_index
    }

    /// Item in a slot, or the empty sentinel if the slot is unoccupied
    pub fn item_at(&self, index: usize) -> Result<&Item, InventoryError> {
        self.check_index(index)?;
        Ok(self.slots[index].as_deref().unwrap_or(&EMPTY_ITEM))
    }

    /// Item in the equipped slot, or the empty sentinel
    pub fn equipped_item(&self) -> &Item {
        self.slots[self.equipped_index]
            .as_deref()
            .unwrap_or(&EMPTY_ITEM)
    }

    /// Icon for a slot, None when the slot is empty
    pub fn sprite_at(&self, index: usize) -> Result<Option<&str>, InventoryError> {
        Ok(self.item_at(index)?.sprite())
    }

    /// Spawnable object for a slot, None when the slot is empty
    pub fn prefab_at(&self, index: usize) -> Result<Option<&str>, InventoryError> {
        Ok(self.item_at(index)?.prefab())
    }

    /// Lowest-index empty slot, or None if every slot is occupied
    pub fn find_first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_none())
    }

    /// Returns true if all slots are occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Returns true if the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Iterates over every slot in order, empty slots yielding the sentinel
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (index, slot.as_deref().unwrap_or(&EMPTY_ITEM)))
    }
}

/// Fixed-size hotbar inventory with an equipped slot
///
/// Owned by the session root and handed out by reference; there is no
/// global instance. Every successful content change fires
/// `InventoryChanged` followed by `EquippedChanged`, and selection changes
/// fire `EquippedChanged` alone. Listeners run before the mutating call
/// returns.
///
/// Index-taking operations reject out-of-range indices with
/// `InventoryError::InvalidSlot` and leave the inventory untouched.
#[derive(Debug)]
pub struct SlotInventory {
    contents: SlotContents,
    listeners: Listeners,
}

impl SlotInventory {
    /// Creates an inventory with `capacity` empty slots and slot 0 equipped
    pub fn new(capacity: usize) -> Result<Self, InventoryError> {
        if capacity == 0 {
            return Err(InventoryError::ZeroCapacity);
        }

        Ok(SlotInventory {
            contents: SlotContents::new(capacity),
            listeners: Listeners::default(),
        })
    }

    /// Read-only view of the slots
    pub fn contents(&self) -> &SlotContents {
        &self.contents
    }

    pub fn capacity(&self) -> usize {
        self.contents.capacity()
    }

    pub fn equipped_index(&self) -> usize {
        self.contents.equipped_index()
    }

    pub fn item_at(&self, index: usize) -> Result<&Item, InventoryError> {
        self.contents.item_at(index)
    }

    pub fn equipped_item(&self) -> &Item {
        self.contents.equipped_item()
    }

    pub fn sprite_at(&self, index: usize) -> Result<Option<&str>, InventoryError> {
        self.contents.sprite_at(index)
    }

    pub fn prefab_at(&self, index: usize) -> Result<Option<&str>, InventoryError> {
        self.contents.prefab_at(index)
    }

    pub fn find_first_empty_slot(&self) -> Option<usize> {
        self.contents.find_first_empty_slot()
    }

    pub fn is_full(&self) -> bool {
        self.contents.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.contents.iter()
    }

    /// Registers a listener for inventory and equipped-slot changes
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(InventoryEvent, &SlotContents) + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Places an item, preferring the requested slot
    ///
    /// If `index` is occupied the item goes to the lowest-index empty slot
    /// instead. Returns the slot the item landed in.
    ///
    /// # Errors
    /// - `InvalidSlot` if `index` is out of range
    /// - `EmptyItem` if `item` is the empty sentinel (storing it would fire
    ///   events without changing any slot)
    /// - `InventoryFull` if no slot is free
    pub fn add(&mut self, item: Arc<Item>, index: usize) -> Result<usize, InventoryError> {
        self.contents.check_index(index)?;
        if item.is_empty() {
            return Err(InventoryError::EmptyItem);
        }

        let target = if self.contents.slots[index].is_none() {
            index
        } else {
            self.contents
                .find_first_empty_slot()
                .ok_or(InventoryError::InventoryFull)?
        };

        log::debug!("Placing '{}' in slot {}", item.id, target);
        self.contents.slots[target] = Some(item);
        self.notify_inventory_changed();

        Ok(target)
    }

    /// Shorthand for `add` at the equipped slot
    pub fn add_at_equipped(&mut self, item: Arc<Item>) -> Result<usize, InventoryError> {
        self.add(item, self.contents.equipped_index)
    }

    /// Empties a slot and returns what it held
    ///
    /// Removing from an already-empty slot returns `Ok(None)` and fires no
    /// notification.
    pub fn remove(&mut self, index: usize) -> Result<Option<Arc<Item>>, InventoryError> {
        self.contents.check_index(index)?;

        let removed = self.contents.slots[index].take();
        if let Some(item) = &removed {
            log::debug!("Removed '{}' from slot {}", item.id, index);
            self.notify_inventory_changed();
        }

        Ok(removed)
    }

    /// Shorthand for `remove` at the equipped slot
    pub fn remove_at_equipped(&mut self) -> Option<Arc<Item>> {
        // The equipped index is always in range
        self.remove(self.contents.equipped_index).ok().flatten()
    }

    /// Selects a slot directly
    ///
    /// Fires `EquippedChanged` even when the slot was already selected, so a
    /// key press always refreshes bound UI.
    pub fn set_equipped_index(&mut self, index: usize) -> Result<(), InventoryError> {
        self.contents.check_index(index)?;

        self.contents.equipped_index = index;
        self.notify_equipped_changed();
        Ok(())
    }

    /// Moves the selection one slot, clamped to the ends (no wraparound)
    ///
    /// Returns true if the selection moved. Nothing fires at a boundary.
    pub fn step_equipped(&mut self, direction: StepDirection) -> bool {
        let current = self.contents.equipped_index;
        let next = match direction {
            StepDirection::Next if current + 1 < self.contents.capacity() => current + 1,
            StepDirection::Previous if current > 0 => current - 1,
            _ => return false,
        };

        self.contents.equipped_index = next;
        self.notify_equipped_changed();
        true
    }

    fn notify_inventory_changed(&mut self) {
        self.listeners
            .notify(InventoryEvent::InventoryChanged, &self.contents);
        self.notify_equipped_changed();
    }

    fn notify_equipped_changed(&mut self) {
        self.listeners
            .notify(InventoryEvent::EquippedChanged, &self.contents);
    }
}

impl Default for SlotInventory {
    fn default() -> Self {
        SlotInventory {
            contents: SlotContents::new(DEFAULT_CAPACITY),
            listeners: Listeners::default(),
        }
    }
}
