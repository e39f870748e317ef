use log::{debug, info};

use super::{is_blank, parse_quantity, IdPolicy, Item, ItemId};

/// Ordered shopping list. Items keep insertion order and every mutation goes
/// through this type so the single-editor rule holds.
#[derive(Clone, Debug, Default)]
pub struct ListStore {
    items: Vec<Item>,
    id_policy: IdPolicy,
    last_issued: ItemId,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(id_policy: IdPolicy) -> Self {
        Self {
            id_policy,
            ..Default::default()
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn snapshot(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn editing(&self) -> Option<&Item> {
        self.items.iter().find(|item| item.is_editing)
    }

    /// Appends a new item. A blank name is ignored and yields `None`.
    pub fn add(&mut self, name: &str, quantity_text: &str) -> Option<Item> {
        if is_blank(name) {
            debug!("Ignored add with blank name");
            return None;
        }

        let id = self.id_policy.next_id(self.items.len(), self.last_issued);
        self.last_issued = self.last_issued.max(id);

        let item = Item::new(id, name.to_string(), parse_quantity(quantity_text));
        info!("[🛒] Added item {} ({} x{})", item.id, item.name, item.quantity);

        self.items.push(item.clone());
        Some(item)
    }

    /// Puts `id` into editing and takes every other item out of it. Returns
    /// whether `id` was found; flags are cleared either way.
    pub fn begin_edit(&mut self, id: ItemId) -> bool {
        let mut found = false;

        for item in self.items.iter_mut() {
            item.is_editing = item.id == id;
            found |= item.is_editing;
        }

        if found {
            info!("[✏️] Editing item {}", id);
        } else {
            debug!("Edit requested for unknown item {}", id);
        }

        found
    }

    /// Writes the edited values back and leaves editing. Items with other
    /// ids are not touched, their editing flag included.
    pub fn commit_edit(&mut self, id: ItemId, name: &str, quantity_text: &str) -> bool {
        let quantity = parse_quantity(quantity_text);
        let mut updated = false;

        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.name = name.to_string();
            item.quantity = quantity;
            item.is_editing = false;
            updated = true;
        }

        if updated {
            info!("[💾] Saved item {} ({} x{})", id, name, quantity);
        } else {
            debug!("Commit for unknown item {}", id);
        }

        updated
    }

    pub fn delete(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        let removed = self.items.len() != before;
        if removed {
            info!("[🗑️] Deleted item {}", id);
        } else {
            debug!("Delete for unknown item {}", id);
        }

        removed
    }
}
