use std::sync::Arc;

use super::bindings::{Binding, KeyBindings};
use super::keys::Key;
use crate::inventory::{InventoryError, SlotInventory, StepDirection};
use crate::item::Item;

/// Inventory actions the player can trigger
///
/// Raw keys and scroll deltas are translated into these once per frame,
/// which keeps the inventory independent of any input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Select a hotbar slot (zero-based)
    SelectSlot(usize),
    /// Mouse wheel forward: equip the next slot
    ScrollUp,
    /// Mouse wheel back: equip the previous slot
    ScrollDown,
    /// Drop the equipped item out of the hotbar
    ThrowEquipped,
}

/// What an applied action did to the inventory
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Equipped slot is now this index
    Selected(usize),
    /// Already at the end of the hotbar
    Unchanged,
    /// This item left the equipped slot
    Thrown(Arc<Item>),
    /// Equipped slot was empty
    NothingToThrow,
}

/// Translates pressed keys into inventory actions using the player's bindings
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    bindings: KeyBindings,
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        InputMapper { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Action for a key press, if the key is bound to an inventory control
    ///
    /// Movement, sprint and interact keys return None; they belong to the
    /// character controller.
    pub fn map_key(&self, key: Key) -> Option<InputAction> {
        let binding = self.bindings.inventory_binding_for(key)?;

        if let Some(slot) = binding.slot_index() {
            return Some(InputAction::SelectSlot(slot));
        }

        match binding {
            Binding::Throw => Some(InputAction::ThrowEquipped),
            _ => None,
        }
    }

    /// Action for a scroll-wheel delta (positive is away from the player)
    pub fn map_scroll(&self, delta: f32) -> Option<InputAction> {
        if delta > 0.0 {
            Some(InputAction::ScrollUp)
        } else if delta < 0.0 {
            Some(InputAction::ScrollDown)
        } else {
            None
        }
    }
}

/// Applies an action to the inventory
///
/// # Errors
/// `InvalidSlot` when a slot key points past the inventory's capacity.
pub fn apply_action(
    action: InputAction,
    inventory: &mut SlotInventory,
) -> Result<ActionOutcome, InventoryError> {
    let outcome = match action {
        InputAction::SelectSlot(index) => {
            inventory.set_equipped_index(index)?;
            ActionOutcome::Selected(index)
        }
        InputAction::ScrollUp => step(inventory, StepDirection::Next),
        InputAction::ScrollDown => step(inventory, StepDirection::Previous),
        InputAction::ThrowEquipped => match inventory.remove_at_equipped() {
            Some(item) => ActionOutcome::Thrown(item),
            None => ActionOutcome::NothingToThrow,
        },
    };

    Ok(outcome)
}

fn step(inventory: &mut SlotInventory, direction: StepDirection) -> ActionOutcome {
    if inventory.step_equipped(direction) {
        ActionOutcome::Selected(inventory.equipped_index())
    } else {
        ActionOutcome::Unchanged
    }
}
