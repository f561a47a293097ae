//! Keybinding definitions for the income list

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key does in the income list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    SelectPrevious,
    SelectNext,
    MoveUp,
    MoveDown,
    EditName,
    OpenActivity,
    PreviousMonth,
    NextMonth,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: &'static str,
    pub action: ListAction,
}

impl Keybinding {
    /// Whether a key event triggers this binding
    ///
    /// Shift is ignored for character keys since terminals disagree on
    /// whether it is reported alongside the already-shifted character.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.code != self.key {
            return false;
        }

        match event.code {
            KeyCode::Char(_) => {
                let mut pressed = event.modifiers;
                pressed.remove(KeyModifiers::SHIFT);
                let mut expected = self.modifiers;
                expected.remove(KeyModifiers::SHIFT);
                pressed == expected
            }
            _ => event.modifiers == self.modifiers,
        }
    }
}

/// All income list keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        description: "Previous category",
        action: ListAction::SelectPrevious,
    },
    Keybinding {
        key: KeyCode::Char('k'),
        modifiers: KeyModifiers::NONE,
        description: "Previous category",
        action: ListAction::SelectPrevious,
    },
    Keybinding {
        key: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        description: "Next category",
        action: ListAction::SelectNext,
    },
    Keybinding {
        key: KeyCode::Char('j'),
        modifiers: KeyModifiers::NONE,
        description: "Next category",
        action: ListAction::SelectNext,
    },
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::SHIFT,
        description: "Move category up",
        action: ListAction::MoveUp,
    },
    Keybinding {
        key: KeyCode::Char('K'),
        modifiers: KeyModifiers::SHIFT,
        description: "Move category up",
        action: ListAction::MoveUp,
    },
    Keybinding {
        key: KeyCode::Down,
        modifiers: KeyModifiers::SHIFT,
        description: "Move category down",
        action: ListAction::MoveDown,
    },
    Keybinding {
        key: KeyCode::Char('J'),
        modifiers: KeyModifiers::SHIFT,
        description: "Move category down",
        action: ListAction::MoveDown,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Edit category",
        action: ListAction::EditName,
    },
    Keybinding {
        key: KeyCode::Char('b'),
        modifiers: KeyModifiers::NONE,
        description: "Show received transactions",
        action: ListAction::OpenActivity,
    },
    Keybinding {
        key: KeyCode::Char('['),
        modifiers: KeyModifiers::NONE,
        description: "Previous month",
        action: ListAction::PreviousMonth,
    },
    Keybinding {
        key: KeyCode::Char(']'),
        modifiers: KeyModifiers::NONE,
        description: "Next month",
        action: ListAction::NextMonth,
    },
];

/// Look up the action bound to a key event
pub fn action_for(event: &KeyEvent) -> Option<ListAction> {
    KEYBINDINGS
        .iter()
        .find(|binding| binding.matches(event))
        .map(|binding| binding.action)
}
