//! Core data models for the income list
//!
//! Categories and their ordered snapshot, the budgeting mode preference,
//! and the month and money values the list renders.

pub mod budget_mode;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;

pub use budget_mode::BudgetMode;
pub use category::{Category, CategoryList, CategoryValidationError};
pub use ids::{CategoryGroupId, CategoryId};
pub use money::Money;
pub use month::Month;
