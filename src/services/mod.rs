//! Pure logic behind the income list
//!
//! Nothing here touches storage or the terminal: reorder resolution turns a
//! drop gesture into a move instruction, and binding selection decides which
//! budget values a row asks for.

pub mod bindings;
pub mod reorder;

pub use bindings::{select_bindings, BudgetBinding, CategoryBindings, ValueResolver};
pub use reorder::{resolve, DropEvent, DropPosition, MoveInstruction};
