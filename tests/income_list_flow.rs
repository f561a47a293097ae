//! End-to-end tests: gesture -> resolve -> store -> re-render

use std::cell::RefCell;
use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use income_list::config::{IncomePaths, PreferenceSource, Preferences, Settings};
use income_list::logging::init_tracing;
use income_list::models::{BudgetMode, Category, CategoryGroupId, CategoryId, Money, Month};
use income_list::services::{
    resolve, select_bindings, BudgetBinding, DropEvent, DropPosition, MoveInstruction,
    ValueResolver,
};
use income_list::storage::{CategoryMutator, CategoryRepository, CategorySource};
use income_list::tui::{IncomeList, ListCallbacks, ListContext, Navigator};
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;

struct SheetValues(HashMap<String, Money>);

impl ValueResolver for SheetValues {
    fn resolve(&self, binding: &BudgetBinding, _month: Month) -> Option<Money> {
        self.0.get(&binding.key()).copied()
    }
}

struct IgnoreNavigation;

impl Navigator for IgnoreNavigation {
    fn open_category_activity(&self, _category_id: CategoryId, _month: Month) {}
}

fn abcd() -> (CategoryGroupId, Vec<Category>) {
    let group = CategoryGroupId::new();
    let categories = ["A", "B", "C", "D"]
        .iter()
        .map(|name| Category::new(*name, group))
        .collect();
    (group, categories)
}

fn names(repo: &CategoryRepository) -> Vec<String> {
    repo.snapshot()
        .unwrap()
        .iter()
        .map(|c| c.name.clone())
        .collect()
}

#[test]
fn test_documented_examples() {
    let (group, categories) = abcd();
    let ids: Vec<_> = categories.iter().map(|c| c.id).collect();
    let repo = CategoryRepository::with_categories(categories).unwrap();
    let snapshot = repo.snapshot().unwrap();

    let d_before_b = resolve(
        &snapshot,
        &DropEvent::new(ids[3], ids[1], DropPosition::Before),
    )
    .unwrap();
    assert_eq!(
        d_before_b,
        MoveInstruction {
            category_id: ids[3],
            group_id: group,
            target_id: Some(ids[1]),
        }
    );

    let a_after_b = resolve(&snapshot, &DropEvent::new(ids[0], ids[1], DropPosition::After)).unwrap();
    assert_eq!(a_after_b.target_id, Some(ids[2]));

    let a_after_d = resolve(&snapshot, &DropEvent::new(ids[0], ids[3], DropPosition::After)).unwrap();
    assert_eq!(a_after_d.target_id, None);

    repo.move_category(&a_after_b).unwrap();
    assert_eq!(names(&repo), vec!["B", "A", "C", "D"]);
}

#[test]
fn test_no_op_drop_keeps_order() {
    init_tracing();

    let (_, categories) = abcd();
    let ids: Vec<_> = categories.iter().map(|c| c.id).collect();
    let repo = CategoryRepository::with_categories(categories).unwrap();
    let prefs = Preferences::in_memory(Settings::default());
    let values = SheetValues(HashMap::new());
    let ctx = ListContext {
        store: &repo,
        preferences: &prefs,
        resolver: &values,
        navigator: &IgnoreNavigation,
    };
    let mut list = IncomeList::new(
        ctx,
        ListCallbacks::new(|_| {}, |_, _, _| {}),
        Month::new(2025, 1).unwrap(),
    )
    .unwrap();

    // C already sits right after B
    let instruction = list
        .handle_drop(DropEvent::new(ids[2], ids[1], DropPosition::After))
        .unwrap();

    assert!(instruction.is_self_anchored());
    assert_eq!(names(&repo), vec!["A", "B", "C", "D"]);
    assert_eq!(repo.revision().unwrap(), 0);
}

#[test]
fn test_keyboard_reorder_and_report_render() {
    init_tracing();

    let temp_dir = TempDir::new().unwrap();
    let paths = IncomePaths::with_base_dir(temp_dir.path().to_path_buf());
    Settings {
        budget_type: BudgetMode::Report,
        currency_symbol: "€".into(),
        ..Settings::default()
    }
    .save(&paths)
    .unwrap();

    let prefs = Preferences::load(paths).unwrap();
    assert_eq!(prefs.budget_mode(), BudgetMode::Report);
    assert_eq!(prefs.currency_symbol(), "€");

    let group = CategoryGroupId::new();
    let salary = Category::new("Salary", group);
    let side = Category::new("Side Gig", group).with_hidden(true);
    let salary_bindings = select_bindings(BudgetMode::Report, salary.id);
    let values = SheetValues(HashMap::from([
        (
            salary_bindings.budgeted.as_ref().unwrap().key(),
            Money::from_cents(400000),
        ),
        (salary_bindings.balance.key(), Money::from_cents(412550)),
    ]));

    let repo = CategoryRepository::with_categories(vec![salary.clone(), side.clone()]).unwrap();
    let edits = RefCell::new(Vec::new());
    let month = Month::new(2025, 2).unwrap();
    let ctx = ListContext {
        store: &repo,
        preferences: &prefs,
        resolver: &values,
        navigator: &IgnoreNavigation,
    };
    let mut list = IncomeList::new(
        ctx,
        ListCallbacks::new(|id| edits.borrow_mut().push(id), |_, _, _| {}),
        month,
    )
    .unwrap()
    .with_current_month(month);

    let rows = list.rows();
    assert_eq!(rows[0].label(), "Salary");
    assert_eq!(rows[0].budgeted.as_ref().unwrap().text, "€4000.00");
    assert_eq!(rows[0].balance.text, "€4125.50");
    assert!(rows[1].hidden);

    list.handle_key(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT))
        .unwrap();
    assert_eq!(names(&repo), vec!["Side Gig", "Salary"]);

    list.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
        .unwrap();

    let mut terminal = Terminal::new(TestBackend::new(64, 6)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            list.render(f, area)
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
    assert!(screen.contains("Budgeted"));
    assert!(screen.contains("€4000.00"));
    drop(list);

    assert_eq!(edits.into_inner(), vec![salary.id]);
}

#[test]
fn test_ungrouped_category_drop_is_rejected() {
    let group = CategoryGroupId::new();
    let grouped = Category::new("Salary", group);
    let loose = Category::ungrouped("Loose Change");
    let repo = CategoryRepository::with_categories(vec![grouped.clone(), loose.clone()]).unwrap();
    let prefs = Preferences::in_memory(Settings::default());
    let values = SheetValues(HashMap::new());
    let ctx = ListContext {
        store: &repo,
        preferences: &prefs,
        resolver: &values,
        navigator: &IgnoreNavigation,
    };
    let mut list = IncomeList::new(
        ctx,
        ListCallbacks::new(|_| {}, |_, _, _| {}),
        Month::new(2025, 3).unwrap(),
    )
    .unwrap();

    let err = list
        .handle_drop(DropEvent::new(loose.id, grouped.id, DropPosition::Before))
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid move: category has no group");
    assert_eq!(names(&repo), vec!["Salary", "Loose Change"]);
}
