use std::collections::HashMap;

use super::keys::Key;
use crate::prefs::PreferenceStore;

/// Every rebindable player control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Forward,
    Backward,
    Right,
    Left,
    Sprint,
    Interact,
    Throw,
    Slot1,
    Slot2,
    Slot3,
    Slot4,
    Slot5,
    Slot6,
    Slot7,
    Slot8,
}

impl Binding {
    pub const ALL: [Binding; 15] = [
        Binding::Forward,
        Binding::Backward,
        Binding::Right,
        Binding::Left,
        Binding::Sprint,
        Binding::Interact,
        Binding::Throw,
        Binding::Slot1,
        Binding::Slot2,
        Binding::Slot3,
        Binding::Slot4,
        Binding::Slot5,
        Binding::Slot6,
        Binding::Slot7,
        Binding::Slot8,
    ];

    /// Controls handled by the hotbar: the slot keys, then throw
    pub const INVENTORY: [Binding; 9] = [
        Binding::Slot1,
        Binding::Slot2,
        Binding::Slot3,
        Binding::Slot4,
        Binding::Slot5,
        Binding::Slot6,
        Binding::Slot7,
        Binding::Slot8,
        Binding::Throw,
    ];

    const SLOTS: [Binding; 8] = [
        Binding::Slot1,
        Binding::Slot2,
        Binding::Slot3,
        Binding::Slot4,
        Binding::Slot5,
        Binding::Slot6,
        Binding::Slot7,
        Binding::Slot8,
    ];

    /// Preference key the binding is stored under
    pub fn preference_key(self) -> &'static str {
        match self {
            Binding::Forward => "forwardKey",
            Binding::Backward => "backwardKey",
            Binding::Right => "rightKey",
            Binding::Left => "leftKey",
            Binding::Sprint => "sprintKey",
            Binding::Interact => "interactKey",
            Binding::Throw => "throwKey",
            Binding::Slot1 => "slot1Key",
            Binding::Slot2 => "slot2Key",
            Binding::Slot3 => "slot3Key",
            Binding::Slot4 => "slot4Key",
            Binding::Slot5 => "slot5Key",
            Binding::Slot6 => "slot6Key",
            Binding::Slot7 => "slot7Key",
            Binding::Slot8 => "slot8Key",
        }
    }

    /// Key used when the preference is unset or unreadable
    pub fn default_key(self) -> Key {
        match self {
            Binding::Forward => Key::W,
            Binding::Backward => Key::S,
            Binding::Right => Key::D,
            Binding::Left => Key::A,
            Binding::Sprint => Key::LeftShift,
            Binding::Interact => Key::Mouse0,
            Binding::Throw => Key::G,
            Binding::Slot1 => Key::Alpha1,
            Binding::Slot2 => Key::Alpha2,
            Binding::Slot3 => Key::Alpha3,
            Binding::Slot4 => Key::Alpha4,
            Binding::Slot5 => Key::Alpha5,
            Binding::Slot6 => Key::Alpha6,
            Binding::Slot7 => Key::Alpha7,
            Binding::Slot8 => Key::Alpha8,
        }
    }

    /// Zero-based hotbar slot selected by this binding
    pub fn slot_index(self) -> Option<usize> {
        Self::SLOTS.iter().position(|slot| *slot == self)
    }

    /// Binding that selects the zero-based hotbar slot `index`
    pub fn slot(index: usize) -> Option<Binding> {
        Self::SLOTS.get(index).copied()
    }

    /// Looks a binding up by its preference key or variant name
    pub fn from_name(name: &str) -> Option<Binding> {
        Self::ALL.iter().copied().find(|binding| {
            binding.preference_key().eq_ignore_ascii_case(name)
                || format!("{:?}", binding).eq_ignore_ascii_case(name)
        })
    }
}

/// Resolved key for every binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    keys: HashMap<Binding, Key>,
}

impl KeyBindings {
    /// Reads every binding from `prefs`
    ///
    /// Unset preferences use the binding's default. Unparseable ones do too,
    /// with a warning, so a bad value never prevents startup.
    pub fn load(prefs: &dyn PreferenceStore) -> Self {
        let keys = Binding::ALL
            .iter()
            .map(|&binding| {
                let default = binding.default_key();
                let key = match prefs.get_string(binding.preference_key()) {
                    None => default,
                    Some(name) => name.parse::<Key>().unwrap_or_else(|err| {
                        log::warn!(
                            "{} for '{}', using default {}",
                            err,
                            binding.preference_key(),
                            default
                        );
                        default
                    }),
                };
                (binding, key)
            })
            .collect();

        KeyBindings { keys }
    }

    /// Writes every binding back as its canonical key name
    pub fn store(&self, prefs: &mut dyn PreferenceStore) {
        for binding in Binding::ALL {
            prefs.set_string(binding.preference_key(), self.key(binding).name());
        }
    }

    pub fn key(&self, binding: Binding) -> Key {
        self.keys
            .get(&binding)
            .copied()
            .unwrap_or_else(|| binding.default_key())
    }

    pub fn set(&mut self, binding: Binding, key: Key) {
        self.keys.insert(binding, key);
    }

    /// First binding (in `Binding::ALL` order) mapped to `key`
    pub fn binding_for(&self, key: Key) -> Option<Binding> {
        Binding::ALL
            .iter()
            .copied()
            .find(|&binding| self.key(binding) == key)
    }

    /// Every binding mapped to `key`
    pub fn bindings_for(&self, key: Key) -> Vec<Binding> {
        Binding::ALL
            .iter()
            .copied()
            .filter(|&binding| self.key(binding) == key)
            .collect()
    }

    /// Hotbar control (slot or throw) mapped to `key`
    ///
    /// Movement and other controls sharing the key don't hide it.
    pub fn inventory_binding_for(&self, key: Key) -> Option<Binding> {
        Binding::INVENTORY
            .iter()
            .copied()
            .find(|&binding| self.key(binding) == key)
    }

    /// Bindings in declaration order with their keys
    pub fn iter(&self) -> impl Iterator<Item = (Binding, Key)> + '_ {
        Binding::ALL.iter().map(|&binding| (binding, self.key(binding)))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            keys: Binding::ALL
                .iter()
                .map(|&binding| (binding, binding.default_key()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;

    #[test]
    fn test_defaults_when_unset() {
        let bindings = KeyBindings::load(&MemoryPreferences::new());
        assert_eq!(bindings, KeyBindings::default());
        assert_eq!(bindings.key(Binding::Slot1), Key::Alpha1);
        assert_eq!(bindings.key(Binding::Throw), Key::G);
        assert_eq!(bindings.key(Binding::Interact), Key::Mouse0);
        assert_eq!(bindings.key(Binding::Sprint), Key::LeftShift);
    }

    #[test]
    fn test_load_reads_preferences() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_string("throwKey", "T");
        prefs.set_string("slot3Key", "F3");

        let bindings = KeyBindings::load(&prefs);
        assert_eq!(bindings.key(Binding::Throw), Key::T);
        assert_eq!(bindings.key(Binding::Slot3), Key::F3);
        assert_eq!(bindings.key(Binding::Slot4), Key::Alpha4);
    }

    #[test]
    fn test_unparseable_preference_falls_back() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_string("throwKey", "NotAKey");

        let bindings = KeyBindings::load(&prefs);
        assert_eq!(bindings.key(Binding::Throw), Key::G);
    }

    #[test]
    fn test_store_writes_canonical_names() {
        let mut bindings = KeyBindings::default();
        bindings.set(Binding::Slot1, Key::F1);

        let mut prefs = MemoryPreferences::new();
        bindings.store(&mut prefs);
        assert_eq!(prefs.get_string("slot1Key").as_deref(), Some("F1"));
        assert_eq!(prefs.get_string("throwKey").as_deref(), Some("G"));
        assert_eq!(KeyBindings::load(&prefs), bindings);
    }

    #[test]
    fn test_binding_for() {
        let mut bindings = KeyBindings::default();
        assert_eq!(bindings.binding_for(Key::Alpha2), Some(Binding::Slot2));
        assert_eq!(bindings.binding_for(Key::Z), None);

        bindings.set(Binding::Throw, Key::Z);
        assert_eq!(bindings.binding_for(Key::Z), Some(Binding::Throw));
        assert_eq!(bindings.binding_for(Key::G), None);
    }

    #[test]
    fn test_inventory_binding_ignores_movement_keys() {
        let mut bindings = KeyBindings::default();
        bindings.set(Binding::Slot3, Key::W);

        assert_eq!(bindings.binding_for(Key::W), Some(Binding::Forward));
        assert_eq!(bindings.inventory_binding_for(Key::W), Some(Binding::Slot3));
        assert_eq!(bindings.bindings_for(Key::W), vec![Binding::Forward, Binding::Slot3]);
        assert_eq!(bindings.inventory_binding_for(Key::A), None);
    }

    #[test]
    fn test_slot_bindings() {
        assert_eq!(Binding::Slot1.slot_index(), Some(0));
        assert_eq!(Binding::Slot8.slot_index(), Some(7));
        assert_eq!(Binding::Throw.slot_index(), None);
        assert_eq!(Binding::slot(2), Some(Binding::Slot3));
        assert_eq!(Binding::slot(8), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Binding::from_name("throwKey"), Some(Binding::Throw));
        assert_eq!(Binding::from_name("slot5"), Some(Binding::Slot5));
        assert_eq!(Binding::from_name("jump"), None);
    }
}
