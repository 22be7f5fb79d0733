use serde::{Deserialize, Serialize};

/// The template for an item that can sit in an inventory slot
///
/// Items are immutable once registered. Inventories hold shared references
/// to them and only ever change which slot points at which item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (used for lookups and console commands)
    pub id: String,

    /// Display name shown in UI
    pub name: String,

    /// Path to the icon drawn in the hotbar
    #[serde(default)]
    pub sprite: String,

    /// Path to the object spawned when the item is held or thrown
    #[serde(default)]
    pub prefab: String,

    /// Marks the empty sentinel; never set for catalog items
    #[serde(skip)]
    is_empty: bool,
}

/// Shared sentinel returned by slot accessors for unoccupied slots.
pub static EMPTY_ITEM: Item = Item::EMPTY;

impl Item {
    /// The canonical "no item" value
    pub const EMPTY: Item = Item {
        id: String::new(),
        name: String::new(),
        sprite: String::new(),
        prefab: String::new(),
        is_empty: true,
    };

    /// Creates a new item template
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sprite: impl Into<String>,
        prefab: impl Into<String>,
    ) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            sprite: sprite.into(),
            prefab: prefab.into(),
            is_empty: false,
        }
    }

    /// Returns true for the empty sentinel
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// Icon path, or None for the empty sentinel
    pub fn sprite(&self) -> Option<&str> {
        if self.is_empty { None } else { Some(&self.sprite) }
    }

    /// Spawnable object path, or None for the empty sentinel
    pub fn prefab(&self) -> Option<&str> {
        if self.is_empty { None } else { Some(&self.prefab) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        assert!(Item::EMPTY.is_empty());
        assert!(EMPTY_ITEM.is_empty());
        assert_eq!(EMPTY_ITEM.sprite(), None);
        assert_eq!(EMPTY_ITEM.prefab(), None);
    }

    #[test]
    fn test_new_item_is_not_empty() {
        let sword = Item::new("sword", "Sword", "icons/sword.png", "prefabs/sword");
        assert!(!sword.is_empty());
        assert_eq!(sword.sprite(), Some("icons/sword.png"));
        assert_eq!(sword.prefab(), Some("prefabs/sword"));
    }

    #[test]
    fn test_deserialized_item_is_not_empty() {
        let item: Item = serde_json::from_str(r#"{"id": "torch", "name": "Torch"}"#).unwrap();
        assert!(!item.is_empty());
        assert_eq!(item.sprite(), Some(""));
    }
}
