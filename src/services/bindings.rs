//! Budget value bindings for income categories
//!
//! A binding is an opaque handle into the budget spreadsheet. This module
//! only decides *which* bindings a row needs for the active budgeting mode;
//! the numbers themselves come from a [`ValueResolver`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{BudgetMode, CategoryId, Money, Month};

/// Sheet holding envelope (rollover) budget values
pub const ENVELOPE_SHEET: &str = "envelope-budget";

/// Sheet holding tracking (report) budget values
pub const TRACKING_SHEET: &str = "tracking-budget";

/// Kind of value a binding resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    Financial,
}

/// Handle to an externally computed value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BudgetBinding {
    pub sheet: &'static str,
    pub name: String,
    pub kind: BindingKind,
}

impl BudgetBinding {
    fn financial(sheet: &'static str, name: String) -> Self {
        Self {
            sheet,
            name,
            kind: BindingKind::Financial,
        }
    }

    /// Tracking budget: amount budgeted for the category
    pub fn tracking_budgeted(category_id: CategoryId) -> Self {
        Self::financial(TRACKING_SHEET, format!("budget-{}", category_id.as_uuid()))
    }

    /// Tracking budget: amount received in the category
    pub fn tracking_sum_amount(category_id: CategoryId) -> Self {
        Self::financial(TRACKING_SHEET, format!("sum-amount-{}", category_id.as_uuid()))
    }

    /// Envelope budget: amount received in the category
    pub fn envelope_sum_amount(category_id: CategoryId) -> Self {
        Self::financial(ENVELOPE_SHEET, format!("sum-amount-{}", category_id.as_uuid()))
    }

    /// Fully qualified key, `sheet!name`
    pub fn key(&self) -> String {
        format!("{}!{}", self.sheet, self.name)
    }
}

impl fmt::Display for BudgetBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.sheet, self.name)
    }
}

/// The bindings one income row displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBindings {
    /// Only present in report mode; the cell is omitted when `None`
    pub budgeted: Option<BudgetBinding>,
    /// Always rendered, and activatable
    pub balance: BudgetBinding,
}

/// Pick the bindings to request for a category under the given mode
pub fn select_bindings(mode: BudgetMode, category_id: CategoryId) -> CategoryBindings {
    match mode {
        BudgetMode::Report => CategoryBindings {
            budgeted: Some(BudgetBinding::tracking_budgeted(category_id)),
            balance: BudgetBinding::tracking_sum_amount(category_id),
        },
        BudgetMode::Rollover => CategoryBindings {
            budgeted: None,
            balance: BudgetBinding::envelope_sum_amount(category_id),
        },
    }
}

/// Resolves bindings into numbers for a given month
///
/// Implemented by the budget engine; `None` means the value is not
/// available (yet).
pub trait ValueResolver {
    fn resolve(&self, binding: &BudgetBinding, month: Month) -> Option<Money>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_mode_shows_budgeted() {
        let id = CategoryId::new();
        let bindings = select_bindings(BudgetMode::Report, id);

        let budgeted = bindings.budgeted.expect("report mode has a budgeted binding");
        assert_eq!(budgeted.sheet, TRACKING_SHEET);
        assert_eq!(budgeted.name, format!("budget-{}", id.as_uuid()));
        assert_eq!(bindings.balance.sheet, TRACKING_SHEET);
        assert!(bindings.balance.name.starts_with("sum-amount-"));
    }

    #[test]
    fn test_rollover_mode_hides_budgeted() {
        let id = CategoryId::new();
        let bindings = select_bindings(BudgetMode::Rollover, id);

        assert!(bindings.budgeted.is_none());
        assert_eq!(bindings.balance, BudgetBinding::envelope_sum_amount(id));
    }

    #[test]
    fn test_unknown_preference_selects_rollover_bindings() {
        let id = CategoryId::new();
        let mode = BudgetMode::from_preference(Some("something-else"));
        assert_eq!(select_bindings(mode, id), select_bindings(BudgetMode::Rollover, id));
    }

    #[test]
    fn test_binding_key() {
        let id = CategoryId::new();
        let binding = BudgetBinding::envelope_sum_amount(id);
        assert_eq!(
            binding.key(),
            format!("envelope-budget!sum-amount-{}", id.as_uuid())
        );
        assert_eq!(binding.to_string(), binding.key());
        assert_eq!(binding.kind, BindingKind::Financial);
    }
}
