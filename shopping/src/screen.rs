use list_store::{Item, ItemId, ListStore};
use log::info;

use crate::{
    dialog::{AddDialog, ItemEditor},
    error::AppError,
    term,
};

const TITLE: &str = "Shopping List";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Add,
    Edit(ItemId),
    Save(ItemId),
    Delete(ItemId),
}

pub fn row_label(item: &Item) -> String {
    if item.is_editing {
        return format!("* {}  Qty:{}  (editing)", item.name, item.quantity);
    }

    format!("  {}  Qty:{}", item.name, item.quantity)
}

/// Menu entries for the current list. An editing item only offers Save, its
/// edit and delete buttons are hidden behind the editor.
pub fn menu_entries(items: &[Item]) -> Vec<(Action, String)> {
    let mut entries = vec![(Action::Add, "Add Item".to_string())];

    for item in items {
        if item.is_editing {
            entries.push((Action::Save(item.id), format!("Save {}", item.name)));
        } else {
            entries.push((Action::Edit(item.id), format!("Edit {}", item.name)));
            entries.push((Action::Delete(item.id), format!("Delete {}", item.name)));
        }
    }

    entries
}

/// The single screen: renders the store and feeds picked actions back in.
#[derive(Debug, Default)]
pub struct Screen {
    add_dialog: AddDialog,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, store: &mut ListStore) -> Result<(), AppError> {
        loop {
            let rows: Vec<String> = store.snapshot().iter().map(row_label).collect();
            let (actions, labels): (Vec<Action>, Vec<String>) =
                menu_entries(store.snapshot()).into_iter().unzip();

            let Some(selected) = term::menu(TITLE, &rows, &labels)? else {
                info!("Leaving with {} items on the list", store.len());
                return Ok(());
            };

            term::reset()?;
            self.apply(actions[selected], store)?;
        }
    }

    fn apply(&mut self, action: Action, store: &mut ListStore) -> Result<(), AppError> {
        match action {
            Action::Add => {
                self.add_dialog.prompt(store)?;
            }
            Action::Edit(id) => {
                if store.begin_edit(id) {
                    Self::open_editor(id, store)?;
                }
            }
            Action::Save(id) => Self::open_editor(id, store)?,
            Action::Delete(id) => {
                store.delete(id);
            }
        }

        Ok(())
    }

    fn open_editor(id: ItemId, store: &mut ListStore) -> Result<(), AppError> {
        let Some(item) = store.get(id) else {
            return Ok(());
        };

        ItemEditor::for_item(item).prompt(store)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_show_quantity() {
        let mut item = Item::new(1, "Bread".into(), 2);
        assert_eq!(row_label(&item), "  Bread  Qty:2");

        item.is_editing = true;
        assert_eq!(row_label(&item), "* Bread  Qty:2  (editing)");
    }

    #[test]
    fn empty_list_only_offers_add() {
        assert_eq!(menu_entries(&[]), vec![(Action::Add, "Add Item".to_string())]);
    }

    #[test]
    fn editing_item_only_offers_save() {
        let mut store = ListStore::new();
        store.add("Bread", "2");
        store.add("Milk", "1");
        store.begin_edit(2);

        let actions: Vec<Action> = menu_entries(store.snapshot())
            .into_iter()
            .map(|(action, _)| action)
            .collect();

        assert_eq!(
            actions,
            vec![
                Action::Add,
                Action::Edit(1),
                Action::Delete(1),
                Action::Save(2),
            ]
        );
    }

    #[test]
    fn delete_action_removes_item() {
        let mut store = ListStore::new();
        store.add("Bread", "2");

        Screen::new()
            .apply(Action::Delete(1), &mut store)
            .expect("delete never prompts");

        assert!(store.is_empty());
    }

    #[test]
    fn edit_of_missing_item_skips_editor() {
        let mut store = ListStore::new();
        store.add("Bread", "2");

        Screen::new()
            .apply(Action::Edit(7), &mut store)
            .expect("unknown id never prompts");

        assert!(store.editing().is_none());
    }
}
