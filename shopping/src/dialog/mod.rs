mod add_dialog;
mod item_editor;

pub use add_dialog::AddDialog;
pub use item_editor::ItemEditor;
