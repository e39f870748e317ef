use inquire::{InquireError, Text};
use list_store::{Item, ItemId, ListStore};
use log::info;

/// Inline editor shown in place of a row while its item is editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEditor {
    id: ItemId,
    pub name: String,
    pub quantity: String,
}

impl ItemEditor {
    pub fn for_item(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn save(self, store: &mut ListStore) -> bool {
        store.commit_edit(self.id, &self.name, &self.quantity)
    }

    /// Asks for the new values and saves them. Esc leaves the item in
    /// editing without touching the store.
    pub fn prompt(mut self, store: &mut ListStore) -> Result<bool, InquireError> {
        let Some(name) = Text::new("Name:")
            .with_initial_value(&self.name)
            .prompt_skippable()?
        else {
            info!("Edit of item {} left open", self.id);
            return Ok(false);
        };
        self.name = name;

        let Some(quantity) = Text::new("Quantity:")
            .with_initial_value(&self.quantity)
            .prompt_skippable()?
        else {
            info!("Edit of item {} left open", self.id);
            return Ok(false);
        };
        self.quantity = quantity;

        Ok(self.save(store))
    }
}
