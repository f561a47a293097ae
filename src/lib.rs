//! Income List - reorderable income categories for a monthly budget view
//!
//! This library renders the ordered income categories of a budget, lets the
//! user reorder them by drag-and-drop or keyboard, and shows the budgeted
//! and received figures that the active budgeting mode calls for.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, settings and the budget mode preference
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Categories, ordered snapshots, months and money
//! - `services`: Reorder resolution and binding selection
//! - `storage`: Category source/mutator seams and the in-memory repository
//! - `tui`: The ratatui income list and its rows
//!
//! # Example
//!
//! ```rust
//! use income_list::models::{Category, CategoryGroupId, CategoryList};
//! use income_list::services::{resolve, DropEvent, DropPosition};
//!
//! let group = CategoryGroupId::new();
//! let salary = Category::new("Salary", group);
//! let bonus = Category::new("Bonus", group);
//! let list = CategoryList::new(vec![salary.clone(), bonus.clone()])?;
//!
//! let event = DropEvent::new(salary.id, bonus.id, DropPosition::After);
//! let instruction = resolve(&list, &event)?;
//! assert_eq!(instruction.target_id, None);
//! # Ok::<(), income_list::IncomeError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{IncomeError, IncomeResult};
