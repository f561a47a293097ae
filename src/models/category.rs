//! Income category and ordered category list models
//!
//! A `CategoryList` is the snapshot a renderer works from: ordering is the
//! display and storage order, and ids are unique within it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryGroupId, CategoryId};
use crate::error::{IncomeError, IncomeResult};

/// A budget category shown in the income list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique, stable identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Owning group; ungrouped categories cannot be reordered
    #[serde(default)]
    pub group_id: Option<CategoryGroupId>,

    /// Whether this category is hidden
    #[serde(default)]
    pub hidden: bool,
}

impl Category {
    /// Create a new visible category in a group
    pub fn new(name: impl Into<String>, group_id: CategoryGroupId) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            group_id: Some(group_id),
            hidden: false,
        }
    }

    /// Create a category that belongs to no group
    pub fn ungrouped(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            group_id: None,
            hidden: false,
        }
    }

    /// Builder-style toggle for the hidden flag
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// An ordered, immutable snapshot of categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryList {
    categories: Vec<Category>,
}

impl CategoryList {
    /// Build a list, rejecting duplicate ids
    pub fn new(categories: Vec<Category>) -> IncomeResult<Self> {
        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.id == category.id) {
                return Err(IncomeError::Validation(format!(
                    "Duplicate category id in list: {}",
                    category.id
                )));
            }
        }
        Ok(Self { categories })
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    /// Category at a display index
    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Display index of a category
    pub fn index_of(&self, id: CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    /// Look up a category by id
    pub fn find(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// The category displayed directly after `id`, if any
    pub fn next_after(&self, id: CategoryId) -> Option<&Category> {
        self.index_of(id).and_then(|i| self.categories.get(i + 1))
    }

    /// Ids in display order
    pub fn ids(&self) -> Vec<CategoryId> {
        self.categories.iter().map(|c| c.id).collect()
    }

    /// The members of one group, in display order
    pub fn in_group(&self, group_id: CategoryGroupId) -> CategoryList {
        CategoryList {
            categories: self
                .categories
                .iter()
                .filter(|c| c.group_id == Some(group_id))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CategoryList {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let group = CategoryGroupId::new();
        let category = Category::new("Salary", group);
        assert_eq!(category.name, "Salary");
        assert_eq!(category.group_id, Some(group));
        assert!(!category.hidden);
    }

    #[test]
    fn test_category_validation() {
        let mut category = Category::ungrouped("Valid");
        assert!(category.validate().is_ok());

        category.name = "  ".into();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }

    #[test]
    fn test_list_rejects_duplicate_ids() {
        let category = Category::ungrouped("Salary");
        let result = CategoryList::new(vec![category.clone(), category]);
        assert!(matches!(result, Err(IncomeError::Validation(_))));
    }

    #[test]
    fn test_list_lookup() {
        let group = CategoryGroupId::new();
        let a = Category::new("A", group);
        let b = Category::new("B", group);
        let list = CategoryList::new(vec![a.clone(), b.clone()]).unwrap();

        assert_eq!(list.index_of(b.id), Some(1));
        assert_eq!(list.next_after(a.id).map(|c| c.id), Some(b.id));
        assert!(list.next_after(b.id).is_none());
        assert_eq!(list.ids(), vec![a.id, b.id]);
    }

    #[test]
    fn test_in_group_keeps_order() {
        let income = CategoryGroupId::new();
        let other = CategoryGroupId::new();
        let a = Category::new("A", income);
        let y = Category::new("Y", other);
        let b = Category::new("B", income);
        let loose = Category::ungrouped("Loose");
        let list = CategoryList::new(vec![a.clone(), y, b.clone(), loose]).unwrap();

        let scoped = list.in_group(income);
        assert_eq!(scoped.ids(), vec![a.id, b.id]);
        assert!(scoped.next_after(b.id).is_none());
    }

    #[test]
    fn test_missing_group_deserializes_as_ungrouped() {
        let json = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","name":"Other"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.group_id.is_none());
        assert!(!category.hidden);
    }
}
