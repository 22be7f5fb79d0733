use super::slots::SlotContents;

/// Notifications raised by a [`SlotInventory`](super::SlotInventory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryEvent {
    /// Slot contents changed. Always followed by `EquippedChanged`.
    InventoryChanged,
    /// The equipped slot (or what it holds) may have changed
    EquippedChanged,
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(InventoryEvent, &SlotContents)>;

/// Ordered list of inventory listeners
///
/// Dispatch is synchronous: every listener has run by the time the
/// mutating call returns.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, event: InventoryEvent, contents: &SlotContents) {
        log::trace!("Dispatching {:?} to {} listeners", event, self.entries.len());
        for (_, listener) in self.entries.iter_mut() {
            listener(event, contents);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
