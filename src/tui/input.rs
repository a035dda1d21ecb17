//! Key mapping and in-place line editing for the interactive screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Edit,
    Copy,
    TogglePunctuation,
    Longer,
    Shorter,
    ToggleMagic,
    Restore,
    Undo,
    Redo,
    Help,
    Quit,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Undo,
    Redo,
    Done,
    Quit,
    Ignore,
}

/// Map a key on the main screen.
pub fn action_for(key: &KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('z') if ctrl => Action::Undo,
        KeyCode::Char('Z') | KeyCode::Char('y') if ctrl => Action::Redo,
        _ if ctrl => Action::Ignore,
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('e') => Action::Edit,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('p') => Action::TogglePunctuation,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Action::Longer,
        KeyCode::Char('-') | KeyCode::Down => Action::Shorter,
        KeyCode::Char('m') => Action::ToggleMagic,
        KeyCode::Char('r') => Action::Restore,
        KeyCode::Char('u') => Action::Undo,
        KeyCode::Char('U') => Action::Redo,
        KeyCode::Char('?') | KeyCode::Char('h') => Action::Help,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

/// Map a key while editing the password in place.
pub fn edit_key_for(key: &KeyEvent) -> EditKey {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => EditKey::Quit,
        KeyCode::Char('z') if ctrl => EditKey::Undo,
        KeyCode::Char('Z') | KeyCode::Char('y') if ctrl => EditKey::Redo,
        _ if ctrl => EditKey::Ignore,
        KeyCode::Char(c) => EditKey::Insert(c),
        KeyCode::Backspace => EditKey::Backspace,
        KeyCode::Delete => EditKey::Delete,
        KeyCode::Left => EditKey::Left,
        KeyCode::Right => EditKey::Right,
        KeyCode::Home => EditKey::Home,
        KeyCode::End => EditKey::End,
        KeyCode::Enter | KeyCode::Esc => EditKey::Done,
        _ => EditKey::Ignore,
    }
}

/// Insert `c` at char position `cursor`.
pub fn insert_char(value: &str, cursor: usize, c: char) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    let at = cursor.min(chars.len());
    chars.insert(at, c);
    chars.into_iter().collect()
}

/// Remove the char at position `index`; out of range leaves `value` as is.
pub fn remove_char(value: &str, index: usize) -> String {
    value
        .chars()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, c)| c)
        .collect()
}
