use std::io::{stdin, stdout, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use blast_core::error::Result;

use super::types::Key;

/// Maps a crossterm key event onto the picker's [`Key`].
///
/// Releases, repeats of non-character keys and keys the picker has no use for
/// map to `None`.
#[must_use]
pub fn key_from_event(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    match key_event.code {
        KeyCode::Char(c) if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Ctrl(c.to_ascii_lowercase()))
        }
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Up | KeyCode::PageUp => Some(Key::Up),
        KeyCode::Down | KeyCode::PageDown => Some(Key::Down),
        _ => None,
    }
}

/// Interprets a `[yes]/no` answer: anything but `no` or `n` is a yes.
#[must_use]
pub fn is_confirmation(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer != "no" && answer != "n"
}

/// Asks a `[yes]/no` question on stdin.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{question} [yes]/no: ");
    stdout().flush()?;

    // Read user input
    let mut input = String::new();
    stdin().read_line(&mut input)?;

    Ok(is_confirmation(&input))
}
