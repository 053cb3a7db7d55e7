//! Service Kit - Agent Tools
//!
//! Menu tools that implement `agent_core::Tool` over a shared catalog.

mod menu_list;
mod menu_lookup;

pub use menu_list::MenuListTool;
pub use menu_lookup::{dish_failure_data, dish_failure_message, MenuLookupTool};
