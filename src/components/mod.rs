//! UI Components
//!
//! Leptos components of the list view.

mod item_list;
mod close_button;

pub use item_list::ItemList;
pub use close_button::CloseButton;
