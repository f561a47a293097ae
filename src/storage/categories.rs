//! In-memory category repository
//!
//! Holds the ordered income categories, hands out snapshots for rendering
//! and applies move instructions. All mutations go through the write lock,
//! so they are serialized.

use std::sync::RwLock;

use crate::error::{IncomeError, IncomeResult};
use crate::models::{Category, CategoryId, CategoryList};
use crate::services::reorder::MoveInstruction;

use super::{CategoryMutator, CategorySource};

#[derive(Debug, Default)]
struct RepositoryState {
    categories: Vec<Category>,
    revision: u64,
}

/// Repository for ordered categories
#[derive(Debug, Default)]
pub struct CategoryRepository {
    state: RwLock<RepositoryState>,
}

impl CategoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with categories in display order
    pub fn with_categories(categories: Vec<Category>) -> IncomeResult<Self> {
        let list = CategoryList::new(categories)?;
        Ok(Self {
            state: RwLock::new(RepositoryState {
                categories: list.as_slice().to_vec(),
                revision: 0,
            }),
        })
    }

    /// Number of successful mutations so far
    pub fn revision(&self) -> IncomeResult<u64> {
        let state = self
            .state
            .read()
            .map_err(|e| IncomeError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(state.revision)
    }

    /// Append a new category
    pub fn insert(&self, category: Category) -> IncomeResult<()> {
        category
            .validate()
            .map_err(|e| IncomeError::Validation(e.to_string()))?;

        let mut state = self
            .state
            .write()
            .map_err(|e| IncomeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if state.categories.iter().any(|c| c.id == category.id) {
            return Err(IncomeError::Validation(format!(
                "Category already exists: {}",
                category.id
            )));
        }

        state.categories.push(category);
        state.revision += 1;
        Ok(())
    }

    /// Set the hidden flag on a category
    pub fn set_hidden(&self, id: CategoryId, hidden: bool) -> IncomeResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| IncomeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| IncomeError::category_not_found(id.to_string()))?;
        category.hidden = hidden;
        state.revision += 1;
        Ok(())
    }
}

impl CategorySource for CategoryRepository {
    fn snapshot(&self) -> IncomeResult<CategoryList> {
        let state = self
            .state
            .read()
            .map_err(|e| IncomeError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        CategoryList::new(state.categories.clone())
    }
}

impl CategoryMutator for CategoryRepository {
    fn move_category(&self, instruction: &MoveInstruction) -> IncomeResult<()> {
        // Anchoring on itself leaves the category where it already is
        if instruction.is_self_anchored() {
            tracing::debug!(category = %instruction.category_id, "self-anchored move ignored");
            return Ok(());
        }

        let mut state = self
            .state
            .write()
            .map_err(|e| IncomeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let from = state
            .categories
            .iter()
            .position(|c| c.id == instruction.category_id)
            .ok_or_else(|| IncomeError::category_not_found(instruction.category_id.to_string()))?;

        if let Some(target_id) = instruction.target_id {
            let target = state
                .categories
                .iter()
                .find(|c| c.id == target_id)
                .ok_or_else(|| IncomeError::category_not_found(target_id.to_string()))?;
            if target.group_id != Some(instruction.group_id) {
                return Err(IncomeError::Validation(format!(
                    "Target {} is not in group {}",
                    target_id, instruction.group_id
                )));
            }
        }

        let mut category = state.categories.remove(from);
        category.group_id = Some(instruction.group_id);

        let insert_at = match instruction.target_id {
            Some(target_id) => state
                .categories
                .iter()
                .position(|c| c.id == target_id)
                .unwrap_or(state.categories.len()),
            None => state
                .categories
                .iter()
                .rposition(|c| c.group_id == Some(instruction.group_id))
                .map(|i| i + 1)
                .unwrap_or(state.categories.len()),
        };

        state.categories.insert(insert_at, category);
        state.revision += 1;

        tracing::debug!(
            category = %instruction.category_id,
            index = insert_at,
            revision = state.revision,
            "category moved"
        );

        Ok(())
    }
}
