//! Storage layer for the income list
//!
//! The list never owns category order. It reads snapshots through
//! [`CategorySource`] and hands move instructions to a [`CategoryMutator`].
//! [`CategoryRepository`] is the in-process implementation of both.

pub mod categories;
pub mod file_io;

pub use categories::CategoryRepository;
pub use file_io::{read_json_opt, write_json_atomic};

use crate::error::IncomeResult;
use crate::models::CategoryList;
use crate::services::reorder::MoveInstruction;

/// Supplies the current ordered category snapshot
pub trait CategorySource {
    fn snapshot(&self) -> IncomeResult<CategoryList>;
}

/// Performs the actual reorder (and persistence) of a category
pub trait CategoryMutator {
    fn move_category(&self, instruction: &MoveInstruction) -> IncomeResult<()>;
}
