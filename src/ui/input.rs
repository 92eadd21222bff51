use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Select,
    ToggleStar,
    Favourites,
    FocusSearch,
    InputChar(char),
    InputBackspace,
    InputConfirm,
    InputCancel,
    Refresh,
    LoadMore,
    Back,
    Help,
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Navigate,
    Editing,
}

impl InputMode {
    pub fn is_editing(self) -> bool {
        self == InputMode::Editing
    }
}

pub fn map_key(key: KeyEvent, mode: InputMode) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if mode.is_editing() {
        return match key.code {
            KeyCode::Esc => Action::InputCancel,
            KeyCode::Enter => Action::InputConfirm,
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Down => Action::InputCancel,
            KeyCode::Char(c) => Action::InputChar(c),
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('s') | KeyCode::Char(' ') => Action::ToggleStar,
        KeyCode::Char('f') => Action::Favourites,
        KeyCode::Char('/') => Action::FocusSearch,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('m') => Action::LoadMore,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => Action::Back,
        _ => Action::None,
    }
}
