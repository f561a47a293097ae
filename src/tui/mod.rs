//! Terminal rendering for the income category list
//!
//! The list is a ratatui table embedded in the hosting budget view. It has
//! no event loop of its own; the host forwards crossterm key and mouse
//! events and calls `render` on every redraw.

pub mod income_list;
pub mod income_row;
pub mod keybindings;

pub use income_list::{DragState, DropIndicator, IncomeList, ListCallbacks, ListContext, Navigator};
pub use income_row::{AmountCell, AmountTone, IncomeRow};
