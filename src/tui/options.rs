use std::io;

use crossterm::event::{Event, KeyEventKind};
use log::warn;

use super::input::{Action, EditKey, action_for, edit_key_for, insert_char, remove_char};
use super::text::{print_help, print_screen};
use crate::clipboard::Clipboard;
use crate::entropy::SecureRng;
use crate::session::Session;
use crate::terminal::{clear, read_event};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// Screen state outside the session: edit cursor, help toggle, clipboard.
#[derive(Default)]
struct Screen {
    editing: Option<usize>,
    show_help: bool,
    clipboard: Option<Clipboard>,
}

pub fn main_loop<R: SecureRng>(session: &mut Session<R>) -> io::Result<()> {
    let mut screen = Screen::default();

    loop {
        clear();
        if std::mem::take(&mut screen.show_help) {
            print_help();
            println!();
        }
        print_screen(session, screen.editing);

        let Event::Key(key) = read_event()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let action = if screen.editing.is_some() {
            edit_options(edit_key_for(&key), &mut screen, session)
        } else {
            menu_options(action_for(&key), &mut screen, session)
        };

        if let Break = action {
            break;
        }
    }
    Ok(())
}

fn menu_options<R: SecureRng>(
    action: Action,
    screen: &mut Screen,
    session: &mut Session<R>,
) -> LoopAction {
    match action {
        Action::Generate => session.generate(),
        Action::Edit => {
            screen.editing = Some(session.value().chars().count());
            session.set_info("Editing password");
        }
        Action::Copy => copy_value(&mut screen.clipboard, session),
        Action::TogglePunctuation => session.toggle_punctuation(),
        Action::Longer => {
            session.set_length(session.length() + 1);
        }
        Action::Shorter => {
            session.set_length(session.length().saturating_sub(1));
        }
        Action::ToggleMagic => {
            session.toggle_magic();
        }
        Action::Restore => {
            if !session.restore() {
                session.set_info("Nothing to restore");
            }
        }
        Action::Undo => {
            if !session.undo() {
                session.set_info("Nothing to undo");
            }
        }
        Action::Redo => {
            if !session.redo() {
                session.set_info("Nothing to redo");
            }
        }
        Action::Help => screen.show_help = true,
        Action::Quit => return Break,
        Action::Ignore => {}
    }
    Continue
}

fn edit_options<R: SecureRng>(
    key: EditKey,
    screen: &mut Screen,
    session: &mut Session<R>,
) -> LoopAction {
    let Some(cursor) = screen.editing else {
        return Continue;
    };
    let len = session.value().chars().count();

    let next = match key {
        EditKey::Insert(c) => {
            let value = insert_char(session.value(), cursor, c);
            Some(session.edit(value, cursor + 1))
        }
        EditKey::Backspace if cursor > 0 => {
            let value = remove_char(session.value(), cursor - 1);
            Some(session.edit(value, cursor - 1))
        }
        EditKey::Delete if cursor < len => {
            let value = remove_char(session.value(), cursor);
            Some(session.edit(value, cursor))
        }
        EditKey::Backspace | EditKey::Delete | EditKey::Ignore => Some(cursor),
        EditKey::Left => Some(cursor.saturating_sub(1)),
        EditKey::Right => Some(cursor + 1),
        EditKey::Home => Some(0),
        EditKey::End => Some(len),
        EditKey::Undo => {
            session.undo();
            Some(cursor)
        }
        EditKey::Redo => {
            session.redo();
            Some(cursor)
        }
        EditKey::Done => {
            session.set_info(format!("Password({}) edited.", len));
            None
        }
        EditKey::Quit => return Break,
    };

    let len = session.value().chars().count();
    screen.editing = next.map(|c| c.min(len));
    Continue
}

fn copy_value<R: SecureRng>(clipboard: &mut Option<Clipboard>, session: &mut Session<R>) {
    if session.value().is_empty() {
        session.set_info("No Password ...");
        return;
    }

    if clipboard.is_none() {
        match Clipboard::open() {
            Ok(c) => *clipboard = Some(c),
            Err(e) => {
                warn!("{}", e);
                session.set_info(e.to_string());
                return;
            }
        }
    }

    if let Some(c) = clipboard.as_mut() {
        match c.copy(session.value()) {
            Ok(()) => {
                let copied = format!("Password({}) copied!", session.value().chars().count());
                session.set_info(copied);
            }
            Err(e) => session.set_info(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Generator;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn session() -> Session<ChaCha20Rng> {
        Session::with_generator(Generator::with_rng(ChaCha20Rng::seed_from_u64(42)))
    }

    fn type_keys<R: SecureRng>(screen: &mut Screen, session: &mut Session<R>, keys: &[EditKey]) {
        for &key in keys {
            edit_options(key, screen, session);
        }
    }

    #[test]
    fn edit_mode_inserts_at_cursor() {
        let mut s = session();
        let mut screen = Screen::default();
        menu_options(Action::Edit, &mut screen, &mut s);
        assert_eq!(screen.editing, Some(0));

        type_keys(
            &mut screen,
            &mut s,
            &[EditKey::Insert('a'), EditKey::Insert('c'), EditKey::Left, EditKey::Insert('b')],
        );
        assert_eq!(s.value(), "abc");
        assert_eq!(screen.editing, Some(2));

        type_keys(&mut screen, &mut s, &[EditKey::Home, EditKey::Delete, EditKey::End, EditKey::Backspace]);
        assert_eq!(s.value(), "b");
        assert_eq!(screen.editing, Some(1));

        edit_options(EditKey::Done, &mut screen, &mut s);
        assert_eq!(screen.editing, None);
    }

    #[test]
    fn edit_mode_respects_limit() {
        let mut s = session();
        let mut screen = Screen::default();
        menu_options(Action::Edit, &mut screen, &mut s);
        let keys: Vec<EditKey> = (0..40).map(|_| EditKey::Insert('x')).collect();
        type_keys(&mut screen, &mut s, &keys);
        assert_eq!(s.value().len(), 32);
        assert_eq!(screen.editing, Some(32));
        assert!(s.over_limit());
    }

    #[test]
    fn undo_in_edit_mode_clamps_cursor() {
        let mut s = session();
        let mut screen = Screen::default();
        menu_options(Action::Generate, &mut screen, &mut s);
        menu_options(Action::Edit, &mut screen, &mut s);
        type_keys(&mut screen, &mut s, &[EditKey::Insert('!'), EditKey::Insert('!')]);
        assert_eq!(screen.editing, Some(10));

        type_keys(&mut screen, &mut s, &[EditKey::Undo, EditKey::Undo]);
        assert_eq!(s.value().chars().count(), 8);
        assert_eq!(screen.editing, Some(8));
    }

    #[test]
    fn menu_actions_drive_session() {
        let mut s = session();
        let mut screen = Screen::default();

        menu_options(Action::Longer, &mut screen, &mut s);
        assert_eq!(s.length(), 9);
        menu_options(Action::TogglePunctuation, &mut screen, &mut s);
        assert!(!s.use_punctuation());
        menu_options(Action::Generate, &mut screen, &mut s);
        assert_eq!(s.value().len(), 9);

        menu_options(Action::Restore, &mut screen, &mut s);
        assert_eq!(s.info(), "Nothing to restore");
        menu_options(Action::Redo, &mut screen, &mut s);
        assert_eq!(s.info(), "Nothing to redo");

        menu_options(Action::Help, &mut screen, &mut s);
        assert!(screen.show_help);
        assert!(matches!(menu_options(Action::Quit, &mut screen, &mut s), Break));
    }
}
