pub mod callout;
pub mod list_item;

pub use callout::Callout;
pub use list_item::ListItem;
