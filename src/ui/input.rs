//! Keyboard input handling with vim-style navigation support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Home,
    End,

    // Tree
    Toggle,
    Expand,
    Collapse,
    CollapseAll,

    // Workstream filter
    NextFilter,
    PreviousFilter,
    SelectFilter(usize),

    // Misc
    Back,
    Help,
    Quit,
}

/// Keyboard bindings configuration
pub struct KeyBindings {
    pub vim_navigation: bool,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            vim_navigation: true,
        }
    }
}

/// Input handler for processing keyboard events
pub struct InputHandler {
    bindings: KeyBindings,
}

impl InputHandler {
    /// Create a new input handler
    pub fn new(vim_navigation: bool) -> Self {
        Self {
            bindings: KeyBindings { vim_navigation },
        }
    }

    /// Map a key event on the dashboard to an action
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Navigation - arrow keys always work
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Right => Some(Action::Expand),
            KeyCode::Left => Some(Action::Collapse),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Home => Some(Action::Home),
            KeyCode::End => Some(Action::End),

            // Vim-style navigation (j/k/h/l)
            KeyCode::Char('j') if self.bindings.vim_navigation => Some(Action::MoveDown),
            KeyCode::Char('k') if self.bindings.vim_navigation => Some(Action::MoveUp),
            KeyCode::Char('h') if self.bindings.vim_navigation => Some(Action::Collapse),
            KeyCode::Char('l') if self.bindings.vim_navigation => Some(Action::Expand),
            KeyCode::Char('g') if self.bindings.vim_navigation => Some(Action::Home),
            KeyCode::Char('G') if self.bindings.vim_navigation => Some(Action::End),

            // Tree
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Toggle),
            KeyCode::Char('c') => Some(Action::CollapseAll),

            // Filter tabs
            KeyCode::Tab => Some(Action::NextFilter),
            KeyCode::BackTab => Some(Action::PreviousFilter),
            KeyCode::Char(c @ '0'..='3') => {
                c.to_digit(10).map(|d| Action::SelectFilter(d as usize))
            }

            // Back/Quit
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::Help),

            _ => None,
        }
    }
}
