use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use super::definition::Item;
use super::error::ItemError;

/// On-disk layout of an item catalog
#[derive(Debug, Deserialize)]
struct ItemCatalog {
    items: Vec<Item>,
}

/// Central registry of all item templates
///
/// Everything that puts an item into an inventory (console commands,
/// pickups) resolves it here first, so every slot shares one `Arc<Item>`
/// per item type.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: HashMap<String, Arc<Item>>,
}

impl ItemRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        ItemRegistry {
            items: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in items pre-registered
    pub fn create_default() -> Self {
        let mut registry = Self::new();
        for item in base_items() {
            // Built-in ids are unique and non-empty
            let _ = registry.register(item);
        }
        registry
    }

    /// Parses a JSON catalog of the form `{"items": [...]}`
    pub fn from_json_str(json: &str) -> Result<Self, ItemError> {
        let catalog: ItemCatalog = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for item in catalog.items {
            registry.register(item)?;
        }
        Ok(registry)
    }

    /// Loads a JSON catalog from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ItemError> {
        let json = fs::read_to_string(path.as_ref())?;
        let registry = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} items from {}",
            registry.len(),
            path.as_ref().display()
        );
        Ok(registry)
    }

    /// Registers a new item template
    pub fn register(&mut self, item: Item) -> Result<Arc<Item>, ItemError> {
        if item.id.is_empty() {
            return Err(ItemError::EmptyId);
        }
        if self.items.contains_key(&item.id) {
            return Err(ItemError::DuplicateId(item.id));
        }

        let item = Arc::new(item);
        self.items.insert(item.id.clone(), Arc::clone(&item));
        Ok(item)
    }

    /// Gets a shared reference to an item by ID
    pub fn get(&self, id: &str) -> Option<Arc<Item>> {
        self.items.get(id).cloned()
    }

    /// Returns true if an item with this ID exists
    pub fn exists(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all items sorted by ID
    pub fn all_items(&self) -> Vec<&Arc<Item>> {
        let mut items: Vec<_> = self.items.values().collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }
}

fn base_items() -> Vec<Item> {
    vec![
        Item::new("sword", "Sword", "icons/sword.png", "prefabs/sword"),
        Item::new("shield", "Shield", "icons/shield.png", "prefabs/shield"),
        Item::new("potion", "Potion", "icons/potion.png", "prefabs/potion"),
        Item::new("elixir", "Elixir", "icons/elixir.png", "prefabs/elixir"),
        Item::new("torch", "Torch", "icons/torch.png", "prefabs/torch"),
    ]
}
