pub mod items;
pub mod logger;

pub use items::{is_blank, parse_quantity, IdPolicy, Item, ItemId, ListStore, Quantity};
