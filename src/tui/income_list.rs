//! Income category list
//!
//! Owns the on-screen snapshot, turns key and mouse gestures into drop
//! events, and hands resolved moves to the category store. The store is the
//! only thing that changes order: after every dispatch the list re-reads its
//! snapshot instead of patching its own copy.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::config::PreferenceSource;
use crate::error::IncomeResult;
use crate::models::{BudgetMode, Category, CategoryId, CategoryList, Month};
use crate::services::bindings::{select_bindings, ValueResolver};
use crate::services::reorder::{resolve, DropEvent, DropPosition, MoveInstruction};
use crate::storage::{CategoryMutator, CategorySource};

use super::income_row::{render_row, IncomeRow};
use super::keybindings::{action_for, ListAction};

/// Opens the per-category, per-month activity view
pub trait Navigator {
    fn open_category_activity(&self, category_id: CategoryId, month: Month);
}

type EditCallback<'a> = Box<dyn FnMut(CategoryId) + 'a>;
type BudgetActionCallback<'a> = Box<dyn FnMut(Month, &str, serde_json::Value) + 'a>;

/// Callbacks supplied by the hosting budget view
pub struct ListCallbacks<'a> {
    pub on_edit: EditCallback<'a>,
    pub on_budget_action: BudgetActionCallback<'a>,
}

impl<'a> ListCallbacks<'a> {
    pub fn new(
        on_edit: impl FnMut(CategoryId) + 'a,
        on_budget_action: impl FnMut(Month, &str, serde_json::Value) + 'a,
    ) -> Self {
        Self {
            on_edit: Box::new(on_edit),
            on_budget_action: Box::new(on_budget_action),
        }
    }
}

/// Where a drop would land if the gesture ended now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropIndicator {
    pub target_id: CategoryId,
    pub position: DropPosition,
}

/// Mouse drag progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source_id: CategoryId,
        source_index: usize,
        indicator: Option<DropIndicator>,
    },
}

/// Collaborators the list reads from and writes to
pub struct ListContext<'a, S> {
    pub store: &'a S,
    pub preferences: &'a dyn PreferenceSource,
    pub resolver: &'a dyn ValueResolver,
    pub navigator: &'a dyn Navigator,
}

/// Interactive list of income categories
pub struct IncomeList<'a, S> {
    ctx: ListContext<'a, S>,
    callbacks: ListCallbacks<'a>,
    month: Month,
    current_month: Month,
    snapshot: CategoryList,
    selected: usize,
    drag: DragState,
    table_state: TableState,
    table_area: Option<Rect>,
}

impl<'a, S> IncomeList<'a, S>
where
    S: CategorySource + CategoryMutator,
{
    /// Create the list for `month`, reading the initial snapshot
    pub fn new(
        ctx: ListContext<'a, S>,
        callbacks: ListCallbacks<'a>,
        month: Month,
    ) -> IncomeResult<Self> {
        let snapshot = ctx.store.snapshot()?;
        Ok(Self {
            ctx,
            callbacks,
            month,
            current_month: Month::current(),
            snapshot,
            selected: 0,
            drag: DragState::Idle,
            table_state: TableState::default(),
            table_area: None,
        })
    }

    /// Override the month treated as "today" for highlighting
    pub fn with_current_month(mut self, current_month: Month) -> Self {
        self.current_month = current_month;
        self
    }

    pub fn snapshot(&self) -> &CategoryList {
        &self.snapshot
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn drop_indicator(&self) -> Option<DropIndicator> {
        match self.drag {
            DragState::Dragging { indicator, .. } => indicator,
            DragState::Idle => None,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.snapshot.get(self.selected)
    }

    /// Re-read the snapshot, keeping the selection on the same category
    pub fn refresh(&mut self) -> IncomeResult<()> {
        let selected_id = self.selected_category().map(|c| c.id);
        self.snapshot = self.ctx.store.snapshot()?;

        self.selected = selected_id
            .and_then(|id| self.snapshot.index_of(id))
            .unwrap_or_else(|| self.selected.min(self.snapshot.len().saturating_sub(1)));
        Ok(())
    }

    /// Build the row models for the current snapshot
    ///
    /// The budget mode and currency symbol are read once per call.
    pub fn rows(&self) -> Vec<IncomeRow> {
        let mode = self.ctx.preferences.budget_mode();
        let symbol = self.ctx.preferences.currency_symbol();
        self.snapshot
            .iter()
            .map(|category| {
                render_row(
                    category,
                    select_bindings(mode, category.id),
                    self.ctx.resolver,
                    self.month,
                    &symbol,
                )
            })
            .collect()
    }

    /// Complete a drop gesture
    ///
    /// The event is resolved against a fresh snapshot from the store, never
    /// the one last rendered, narrowed to the moved category's group so that
    /// "after" the last member appends to that group. Resolution errors
    /// propagate; a failed dispatch belongs to the store and is only logged.
    pub fn handle_drop(&mut self, event: DropEvent) -> IncomeResult<MoveInstruction> {
        let latest = self.ctx.store.snapshot()?;
        let scoped = match latest.find(event.moved_id).and_then(|c| c.group_id) {
            Some(group_id) => latest.in_group(group_id),
            None => latest,
        };

        let instruction = resolve(&scoped, &event).map_err(|e| {
            tracing::error!(
                moved = %event.moved_id,
                target = %event.target_id,
                error = %e,
                "drop does not match category list"
            );
            e
        })?;

        tracing::info!(
            category = %instruction.category_id,
            group = %instruction.group_id,
            before = ?instruction.target_id.map(|id| id.to_string()),
            "dispatching category move"
        );

        if let Err(e) = self.ctx.store.move_category(&instruction) {
            tracing::warn!(category = %instruction.category_id, error = %e, "category move failed");
        }

        self.refresh()?;
        Ok(instruction)
    }

    /// Handle a key press; returns whether the key was used
    pub fn handle_key(&mut self, key: KeyEvent) -> IncomeResult<bool> {
        let Some(action) = action_for(&key) else {
            return Ok(false);
        };

        match action {
            ListAction::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            ListAction::SelectNext => {
                if self.selected + 1 < self.snapshot.len() {
                    self.selected += 1;
                }
            }
            ListAction::MoveUp => {
                if let Some(target) = self.selected.checked_sub(1) {
                    self.move_selected(target, DropPosition::Before)?;
                }
            }
            ListAction::MoveDown => {
                self.move_selected(self.selected + 1, DropPosition::After)?;
            }
            ListAction::EditName => self.edit_selected(),
            ListAction::OpenActivity => self.open_selected_activity(),
            ListAction::PreviousMonth => self.month = self.month.prev(),
            ListAction::NextMonth => self.month = self.month.next(),
        }

        Ok(true)
    }

    /// Handle a mouse event; returns whether it was used
    ///
    /// Hit-testing uses the area from the last `render`.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> IncomeResult<bool> {
        let hit = self.row_at(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = hit else {
                    return Ok(false);
                };
                self.selected = index;
                if let Some(category) = self.snapshot.get(index) {
                    self.drag = DragState::Dragging {
                        source_id: category.id,
                        source_index: index,
                        indicator: None,
                    };
                }
                Ok(true)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let DragState::Dragging {
                    source_id,
                    source_index,
                    ..
                } = self.drag
                else {
                    return Ok(false);
                };

                let indicator = hit
                    .filter(|&i| i != source_index && self.same_group(source_index, i))
                    .and_then(|i| {
                        self.snapshot.get(i).map(|target| DropIndicator {
                            target_id: target.id,
                            position: if i > source_index {
                                DropPosition::After
                            } else {
                                DropPosition::Before
                            },
                        })
                    });

                self.drag = DragState::Dragging {
                    source_id,
                    source_index,
                    indicator,
                };
                Ok(true)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let drag = std::mem::take(&mut self.drag);
                match drag {
                    DragState::Dragging {
                        source_id,
                        indicator: Some(indicator),
                        ..
                    } => {
                        let event =
                            DropEvent::new(source_id, indicator.target_id, indicator.position);
                        self.handle_drop(event)?;
                        Ok(true)
                    }
                    DragState::Dragging { .. } => Ok(true),
                    DragState::Idle => Ok(false),
                }
            }
            _ => Ok(false),
        }
    }

    /// Drop the selected category next to the one at `target`
    ///
    /// Neighbours from another group are left alone.
    fn move_selected(&mut self, target: usize, position: DropPosition) -> IncomeResult<()> {
        if !self.same_group(self.selected, target) {
            return Ok(());
        }
        let moved = self.snapshot.get(self.selected).map(|c| c.id);
        let anchor = self.snapshot.get(target).map(|c| c.id);
        if let (Some(moved), Some(anchor)) = (moved, anchor) {
            self.handle_drop(DropEvent::new(moved, anchor, position))?;
        }
        Ok(())
    }

    fn same_group(&self, a: usize, b: usize) -> bool {
        match (self.snapshot.get(a), self.snapshot.get(b)) {
            (Some(a), Some(b)) => a.group_id.is_some() && a.group_id == b.group_id,
            _ => false,
        }
    }

    /// Activate the name of the selected category
    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_category().map(|c| c.id) {
            (self.callbacks.on_edit)(id);
        }
    }

    /// Activate the balance cell of the selected category
    pub fn open_selected_activity(&self) {
        if let Some(category) = self.selected_category() {
            self.ctx
                .navigator
                .open_category_activity(category.id, self.month);
        }
    }

    /// Forward a budgeted-cell action unchanged
    ///
    /// Returns `false` when the current mode shows no budgeted cell.
    pub fn budget_action(&mut self, action: &str, args: serde_json::Value) -> bool {
        if self.ctx.preferences.budget_mode() != BudgetMode::Report {
            return false;
        }
        (self.callbacks.on_budget_action)(self.month, action, args);
        true
    }

    /// Render the list into `area`
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let is_current = self.month == self.current_month;
        let title_style = if is_current {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let block = Block::default()
            .title(format!(" Income - {} ", self.month))
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));

        if self.snapshot.is_empty() {
            self.table_area = None;
            let text = Paragraph::new("No income categories.")
                .block(block)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(text, area);
            return;
        }

        let rows = self.rows();
        let show_budgeted = rows.iter().any(|r| r.budgeted.is_some());
        let indicator = self.drop_indicator();

        let table_rows: Vec<Row> = rows
            .iter()
            .map(|row| {
                let marker = indicator
                    .filter(|i| i.target_id == row.category_id)
                    .map(|i| i.position);
                row.to_table_row(marker, is_current)
            })
            .collect();

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut header_cells = vec![Cell::from("Category").style(bold)];
        let mut widths = vec![Constraint::Min(20)];
        if show_budgeted {
            header_cells.push(Cell::from("Budgeted").style(bold));
            widths.push(Constraint::Length(14));
        }
        header_cells.push(Cell::from("Received").style(bold));
        widths.push(Constraint::Length(14));

        let header = Row::new(header_cells)
            .style(Style::default().fg(Color::Yellow))
            .height(1);

        let table = Table::new(table_rows, widths)
            .header(header)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        self.table_state.select(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut self.table_state);
        self.table_area = Some(area);
    }

    /// Map a terminal cell to a row index in the snapshot
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table_area?;
        // Border plus header line
        let first_row = area.y.saturating_add(2);
        let last_row = area.bottom().saturating_sub(1);

        if column <= area.x || column >= area.right().saturating_sub(1) {
            return None;
        }
        if row < first_row || row >= last_row {
            return None;
        }

        let index = (row - first_row) as usize + self.table_state.offset();
        (index < self.snapshot.len()).then_some(index)
    }
}
