//! UI Components
//!
//! Leptos components rendering composed blocks and wide-viewport chrome.

mod display_block;
mod menu_list;
mod side_panel;

pub use display_block::{ActionLink, DisplayBlockView};
pub use menu_list::MenuList;
pub use side_panel::SidePanel;
