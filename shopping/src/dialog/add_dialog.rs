use inquire::{InquireError, Text};
use list_store::{Item, ListStore};
use log::{info, warn};

/// Draft behind the "Add Shopping items" dialog. The draft survives a
/// cancel, so reopening shows what was typed last time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddDialog {
    visible: bool,
    pub name: String,
    pub quantity: String,
}

impl AddDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn cancel(&mut self) {
        self.visible = false;
    }

    /// Hands the draft to the store. On success the draft is cleared and the
    /// dialog closes; a blank name keeps it open for another try.
    pub fn confirm(&mut self, store: &mut ListStore) -> Option<Item> {
        let item = store.add(&self.name, &self.quantity)?;

        self.visible = false;
        self.name.clear();
        self.quantity.clear();

        Some(item)
    }

    /// Runs the dialog on the terminal until an item is added or the user
    /// backs out with Esc.
    pub fn prompt(&mut self, store: &mut ListStore) -> Result<Option<Item>, InquireError> {
        self.open();

        while self.visible {
            let Some(name) = Text::new("Add Shopping items - name:")
                .with_placeholder("Enter item name")
                .with_initial_value(&self.name)
                .with_help_message("Esc to cancel")
                .prompt_skippable()?
            else {
                self.cancel();
                break;
            };
            self.name = name;

            let Some(quantity) = Text::new("Add Shopping items - quantity:")
                .with_placeholder("Enter item quantity")
                .with_initial_value(&self.quantity)
                .with_help_message("Anything that isn't a number counts as 1")
                .prompt_skippable()?
            else {
                self.cancel();
                break;
            };
            self.quantity = quantity;

            if let Some(item) = self.confirm(store) {
                return Ok(Some(item));
            }

            warn!("Add dialog confirmed with a blank name, keeping it open");
        }

        info!("Add dialog dismissed");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: &str) -> AddDialog {
        let mut dialog = AddDialog::new();
        dialog.open();
        dialog.name = name.into();
        dialog.quantity = quantity.into();
        dialog
    }

    #[test]
    fn confirm_adds_and_resets() {
        let mut store = ListStore::new();
        let mut dialog = draft("Bread", "2");

        let item = dialog.confirm(&mut store).expect("bread should be added");

        assert_eq!(item, Item::new(1, "Bread".into(), 2));
        assert!(!dialog.is_visible());
        assert_eq!(dialog, AddDialog::new());
    }

    #[test]
    fn blank_name_keeps_dialog_open() {
        let mut store = ListStore::new();
        let mut dialog = draft("  ", "3");

        assert!(dialog.confirm(&mut store).is_none());

        assert!(store.is_empty());
        assert!(dialog.is_visible());
        assert_eq!(dialog.quantity, "3");
    }

    #[test]
    fn cancel_keeps_draft() {
        let mut dialog = draft("Milk", "1");

        dialog.cancel();
        assert!(!dialog.is_visible());

        dialog.open();
        assert_eq!(dialog.name, "Milk");
        assert_eq!(dialog.quantity, "1");
    }
}
