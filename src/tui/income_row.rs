//! Income category row
//!
//! Combines a category with its resolved budget values. The row model is
//! plain data so that it can be inspected without a terminal; `to_table_row`
//! turns it into a ratatui row.

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Cell, Row},
};

use crate::models::{Category, CategoryId, Money, Month};
use crate::services::bindings::{BudgetBinding, CategoryBindings, ValueResolver};
use crate::services::reorder::DropPosition;

/// Placeholder for values the resolver could not provide
pub const UNRESOLVED: &str = "—";

/// Sign convention used to colour an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTone {
    Positive,
    Negative,
    Zero,
    Unknown,
}

impl AmountTone {
    fn of(amount: Option<Money>) -> Self {
        match amount {
            None => Self::Unknown,
            Some(m) if m.is_negative() => Self::Negative,
            Some(m) if m.is_zero() => Self::Zero,
            Some(_) => Self::Positive,
        }
    }

    fn color(&self) -> Color {
        match self {
            Self::Positive => Color::Green,
            Self::Negative => Color::Red,
            Self::Zero => Color::Yellow,
            Self::Unknown => Color::DarkGray,
        }
    }
}

/// One monetary cell and the binding it was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountCell {
    pub binding: BudgetBinding,
    pub amount: Option<Money>,
    pub text: String,
    pub tone: AmountTone,
}

impl AmountCell {
    pub fn resolve(
        binding: BudgetBinding,
        resolver: &dyn ValueResolver,
        month: Month,
        currency_symbol: &str,
    ) -> Self {
        let amount = resolver.resolve(&binding, month);
        let text = amount
            .map(|m| m.format_with_symbol(currency_symbol))
            .unwrap_or_else(|| UNRESOLVED.to_string());

        Self {
            binding,
            amount,
            text,
            tone: AmountTone::of(amount),
        }
    }

    fn style(&self) -> Style {
        Style::default().fg(self.tone.color())
    }
}

/// Display model for one income category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeRow {
    pub category_id: CategoryId,
    pub name: String,
    pub hidden: bool,
    /// Present only when the budget mode shows a budgeted column
    pub budgeted: Option<AmountCell>,
    pub balance: AmountCell,
}

impl IncomeRow {
    /// Stable textual identity of the row
    pub fn label(&self) -> &str {
        &self.name
    }

    /// Build the ratatui row
    ///
    /// `indicator` marks this row as the current drop target.
    pub fn to_table_row(&self, indicator: Option<DropPosition>, highlight: bool) -> Row<'static> {
        let marker = match indicator {
            Some(DropPosition::Before) => "↑ ",
            Some(DropPosition::After) => "↓ ",
            None => "  ",
        };

        let mut amount_modifier = Modifier::empty();
        if highlight {
            amount_modifier |= Modifier::BOLD;
        }

        let mut cells = vec![Cell::from(format!("{}{}", marker, self.name))];
        if let Some(budgeted) = &self.budgeted {
            cells.push(
                Cell::from(budgeted.text.clone())
                    .style(budgeted.style().add_modifier(amount_modifier)),
            );
        }
        cells.push(
            Cell::from(self.balance.text.clone())
                .style(self.balance.style().add_modifier(amount_modifier)),
        );

        let mut style = Style::default();
        if self.hidden {
            style = style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
        }
        if indicator.is_some() {
            style = style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
        }

        Row::new(cells).style(style)
    }
}

/// Resolve the selected bindings for a category into a row
pub fn render_row(
    category: &Category,
    bindings: CategoryBindings,
    resolver: &dyn ValueResolver,
    month: Month,
    currency_symbol: &str,
) -> IncomeRow {
    IncomeRow {
        category_id: category.id,
        name: category.name.clone(),
        hidden: category.hidden,
        budgeted: bindings
            .budgeted
            .map(|b| AmountCell::resolve(b, resolver, month, currency_symbol)),
        balance: AmountCell::resolve(bindings.balance, resolver, month, currency_symbol),
    }
}
