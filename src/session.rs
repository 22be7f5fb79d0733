//! Application root
//!
//! A `Session` is built once at startup and owns the hotbar inventory,
//! the item catalog, the key mapper and the preference store. Whatever
//! needs the inventory (input driver, UI, console) gets it from here by
//! reference.

use std::sync::Arc;

use thiserror::Error;

use crate::config::SessionConfig;
use crate::input::{
    ActionOutcome, Binding, InputAction, InputMapper, Key, KeyBindings, apply_action,
};
use crate::inventory::{InventoryError, SlotInventory};
use crate::item::{Item, ItemRegistry};
use crate::prefs::{PreferenceStore, PrefsError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No item with id '{0}'")]
    UnknownItem(String),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Prefs(#[from] PrefsError),
}

pub struct Session<P: PreferenceStore> {
    inventory: SlotInventory,
    registry: ItemRegistry,
    mapper: InputMapper,
    prefs: P,
}

impl<P: PreferenceStore> Session<P> {
    /// Creates the inventory and loads key bindings from `prefs`
    pub fn new(
        config: &SessionConfig,
        registry: ItemRegistry,
        prefs: P,
    ) -> Result<Self, SessionError> {
        let inventory = SlotInventory::new(config.capacity)?;
        let bindings = KeyBindings::load(&prefs);

        log::info!(
            "Session started with {} slots and {} items",
            inventory.capacity(),
            registry.len()
        );

        Ok(Session {
            inventory,
            registry,
            mapper: InputMapper::new(bindings),
            prefs,
        })
    }

    pub fn inventory(&self) -> &SlotInventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut SlotInventory {
        &mut self.inventory
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn bindings(&self) -> &KeyBindings {
        self.mapper.bindings()
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    /// Puts a catalog item into the hotbar
    ///
    /// With no slot given the item goes to the equipped slot (or the first
    /// free one if that is taken). Returns the slot it landed in.
    pub fn give(&mut self, item_id: &str, slot: Option<usize>) -> Result<usize, SessionError> {
        let item = self.lookup(item_id)?;
        let index = match slot {
            Some(slot) => self.inventory.add(item, slot)?,
            None => self.inventory.add_at_equipped(item)?,
        };
        Ok(index)
    }

    /// Handles a key press; None if the key isn't an inventory control
    pub fn press(&mut self, key: Key) -> Result<Option<ActionOutcome>, SessionError> {
        match self.mapper.map_key(key) {
            Some(action) => self.perform(action).map(Some),
            None => Ok(None),
        }
    }

    /// Handles a scroll-wheel delta; None if the delta is zero
    pub fn scroll(&mut self, delta: f32) -> Result<Option<ActionOutcome>, SessionError> {
        match self.mapper.map_scroll(delta) {
            Some(action) => self.perform(action).map(Some),
            None => Ok(None),
        }
    }

    pub fn perform(&mut self, action: InputAction) -> Result<ActionOutcome, SessionError> {
        let outcome = apply_action(action, &mut self.inventory)?;
        log::debug!("{:?} -> {:?}", action, outcome);
        Ok(outcome)
    }

    /// Rebinds a control and records it in the preference store
    ///
    /// A key may be shared between controls; sharing is logged as a warning.
    pub fn rebind(&mut self, binding: Binding, key: Key) {
        let shared: Vec<_> = self
            .mapper
            .bindings()
            .bindings_for(key)
            .into_iter()
            .filter(|&other| other != binding)
            .collect();
        if !shared.is_empty() {
            log::warn!("{} is also bound to {:?}", key, shared);
        }

        self.mapper.bindings_mut().set(binding, key);
        self.prefs.set_string(binding.preference_key(), key.name());
        log::info!("Bound {:?} to {}", binding, key);
    }

    /// Writes pending preference changes to storage
    pub fn save_preferences(&mut self) -> Result<(), SessionError> {
        self.prefs.flush()?;
        Ok(())
    }

    fn lookup(&self, item_id: &str) -> Result<Arc<Item>, SessionError> {
        self.registry
            .get(item_id)
            .ok_or_else(|| SessionError::UnknownItem(item_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;

    fn session() -> Session<MemoryPreferences> {
        Session::new(
            &SessionConfig::default(),
            ItemRegistry::create_default(),
            MemoryPreferences::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_session_uses_config_capacity() {
        let config = SessionConfig {
            capacity: 3,
            ..SessionConfig::default()
        };
        let session = Session::new(&config, ItemRegistry::new(), MemoryPreferences::new()).unwrap();
        assert_eq!(session.inventory().capacity(), 3);
    }

    #[test]
    fn test_zero_capacity_config_fails() {
        let config = SessionConfig {
            capacity: 0,
            ..SessionConfig::default()
        };
        let result = Session::new(&config, ItemRegistry::new(), MemoryPreferences::new());
        assert!(matches!(
            result,
            Err(SessionError::Inventory(InventoryError::ZeroCapacity))
        ));
    }

    #[test]
    fn test_bindings_loaded_from_prefs() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_string("throwKey", "T");
        let session = Session::new(&SessionConfig::default(), ItemRegistry::new(), prefs).unwrap();
        assert_eq!(session.bindings().key(Binding::Throw), Key::T);
    }

    #[test]
    fn test_give_and_throw() {
        let mut session = session();
        assert_eq!(session.give("sword", None).unwrap(), 0);
        assert_eq!(session.give("shield", Some(4)).unwrap(), 4);

        let outcome = session.press(Key::G).unwrap();
        assert!(matches!(outcome, Some(ActionOutcome::Thrown(item)) if item.id == "sword"));
        assert!(session.inventory().equipped_item().is_empty());
    }

    #[test]
    fn test_give_unknown_item() {
        let mut session = session();
        assert!(matches!(
            session.give("banana", None),
            Err(SessionError::UnknownItem(id)) if id == "banana"
        ));
    }

    #[test]
    fn test_press_and_scroll() {
        let mut session = session();
        assert_eq!(session.press(Key::Alpha3).unwrap(), Some(ActionOutcome::Selected(2)));
        assert_eq!(session.scroll(1.0).unwrap(), Some(ActionOutcome::Selected(3)));
        assert_eq!(session.scroll(-1.0).unwrap(), Some(ActionOutcome::Selected(2)));
        assert_eq!(session.scroll(0.0).unwrap(), None);
        assert_eq!(session.press(Key::W).unwrap(), None);
    }

    #[test]
    fn test_slot_key_past_capacity() {
        let config = SessionConfig {
            capacity: 2,
            ..SessionConfig::default()
        };
        let mut session = Session::new(
            &config,
            ItemRegistry::create_default(),
            MemoryPreferences::new(),
        )
        .unwrap();
        assert!(matches!(
            session.press(Key::Alpha5),
            Err(SessionError::Inventory(InventoryError::InvalidSlot { index: 4, capacity: 2 }))
        ));
    }

    #[test]
    fn test_rebind_to_movement_key_still_selects_slot() {
        let mut session = session();
        session.rebind(Binding::Slot3, Key::W);

        assert_eq!(session.press(Key::W).unwrap(), Some(ActionOutcome::Selected(2)));
        assert_eq!(session.bindings().key(Binding::Forward), Key::W);
    }

    #[test]
    fn test_rebind_updates_prefs() {
        let mut session = session();
        session.rebind(Binding::Slot1, Key::Q);

        assert_eq!(session.press(Key::Q).unwrap(), Some(ActionOutcome::Selected(0)));
        assert_eq!(session.prefs().get_string("slot1Key").as_deref(), Some("Q"));
        session.save_preferences().unwrap();
    }
}
