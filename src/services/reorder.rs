//! Drag-and-drop reorder resolution
//!
//! Translates a completed drop gesture into a move instruction for the
//! category store. The store only understands "insert before target", so a
//! drop *after* X is re-expressed as "before whatever currently follows X",
//! or as an append when X is last.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IncomeError, IncomeResult};
use crate::models::{CategoryGroupId, CategoryId, CategoryList};

/// Where the dragged item was dropped relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Before,
    After,
}

impl fmt::Display for DropPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

/// A completed drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    pub moved_id: CategoryId,
    pub target_id: CategoryId,
    pub drop_position: DropPosition,
}

impl DropEvent {
    pub fn new(moved_id: CategoryId, target_id: CategoryId, drop_position: DropPosition) -> Self {
        Self {
            moved_id,
            target_id,
            drop_position,
        }
    }
}

/// Insert `category_id` immediately before `target_id` within `group_id`
///
/// `target_id == None` appends to the end of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInstruction {
    pub category_id: CategoryId,
    pub group_id: CategoryGroupId,
    pub target_id: Option<CategoryId>,
}

impl MoveInstruction {
    /// True when the instruction anchors the category on itself
    pub fn is_self_anchored(&self) -> bool {
        self.target_id == Some(self.category_id)
    }
}

/// Resolve a drop gesture against the snapshot current at release time
pub fn resolve(categories: &CategoryList, event: &DropEvent) -> IncomeResult<MoveInstruction> {
    let moved = categories
        .find(event.moved_id)
        .ok_or_else(IncomeError::moved_category_not_found)?;

    let group_id = moved
        .group_id
        .ok_or_else(IncomeError::category_has_no_group)?;

    let target_id = match event.drop_position {
        DropPosition::Before => Some(event.target_id),
        DropPosition::After => {
            let index = categories
                .index_of(event.target_id)
                .ok_or_else(IncomeError::target_not_found)?;
            categories.get(index + 1).map(|next| next.id)
        }
    };

    tracing::debug!(
        moved = %event.moved_id,
        target = %event.target_id,
        position = %event.drop_position,
        anchor = ?target_id.map(|id| id.to_string()),
        "resolved category drop"
    );

    Ok(MoveInstruction {
        category_id: event.moved_id,
        group_id,
        target_id,
    })
}
