mod id_policy;
mod item;
mod list_store;

pub use id_policy::IdPolicy;
pub use item::{is_blank, parse_quantity, Item, ItemId, Quantity, DEFAULT_QUANTITY};
pub use list_store::ListStore;
