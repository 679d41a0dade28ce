//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // Table navigation
    SelectNext,
    SelectPrev,

    // Directory actions
    AddUser,
    DeleteSelected,
    EditSelected,
    CancelFetches,

    // Edit dialog
    DialogChar(char),
    DialogBackspace,
    DialogCursorLeft,
    DialogCursorRight,
    DialogNextField,
    DialogPrevField,
    SaveEdit,
    CancelEdit,

    // Shell
    ToggleTheme,
    ToggleDrawer,
    CloseDrawer,
    DismissNotification,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    dialog_open: bool,
    drawer_open: bool,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('x') => return Some(UiEvent::CancelFetches),
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            _ => {}
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if dialog_open {
        return handle_dialog_keys(key);
    }

    if drawer_open {
        // Tab keeps the drawer open so focus can move through it
        return match key.code {
            KeyCode::Tab | KeyCode::BackTab => None,
            _ => Some(UiEvent::CloseDrawer),
        };
    }

    handle_table_keys(key)
}

/// Handle keys for the user table
fn handle_table_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Char('a') => Some(UiEvent::AddUser),
        KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::DeleteSelected),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::EditSelected),
        KeyCode::Char('t') => Some(UiEvent::ToggleTheme),
        KeyCode::Char('m') => Some(UiEvent::ToggleDrawer),
        KeyCode::Char('x') | KeyCode::Esc => Some(UiEvent::DismissNotification),
        _ => None,
    }
}

/// Handle keys for the edit dialog
fn handle_dialog_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::CancelEdit),
        KeyCode::Enter => Some(UiEvent::SaveEdit),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::DialogNextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::DialogPrevField),
        KeyCode::Left => Some(UiEvent::DialogCursorLeft),
        KeyCode::Right => Some(UiEvent::DialogCursorRight),
        KeyCode::Backspace => Some(UiEvent::DialogBackspace),
        KeyCode::Char(c) => Some(UiEvent::DialogChar(c)),
        _ => None,
    }
}
