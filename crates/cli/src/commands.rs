//! One-shot, non-interactive actions.
//!
//! Each action loads through the [`Store`], applies one lookup or mutation
//! and persists straight away. Questions for the user are passed in as
//! closures so the actions can run without a terminal.

use log::info;

use blast_core::bookmarks::{BookmarkEntry, BookmarkSet};
use blast_core::error::{Error, Result};
use blast_core::handoff;
use blast_core::store::Store;

/// Result of [`save_bookmark`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Replaced { previous: String },
    Aborted,
}

/// Result of [`use_bookmark`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseOutcome {
    HandedOff(BookmarkEntry),
    Declined(BookmarkEntry),
}

/// Bookmarks `command` under `name`.
///
/// `confirm_replace` is only asked when the name is already taken.
///
/// # Errors
///
/// Returns an error for an invalid name or command, for a command that would
/// run blast itself, or when the store cannot be written.
pub fn save_bookmark<S, F>(
    store: &mut S,
    name: &str,
    command: &str,
    confirm_replace: F,
) -> Result<SaveOutcome>
where
    S: Store,
    F: FnOnce(&BookmarkEntry) -> Result<bool>,
{
    // Avoid recursion
    if command.split_whitespace().next() == Some("blast") {
        return Err(Error::RecursiveBookmark(command.to_string()));
    }

    let entry = BookmarkEntry::new(name, command)?;
    let mut snapshot = store.load();

    if let Some(existing) = snapshot.bookmarks.get(name) {
        if !confirm_replace(existing)? {
            return Ok(SaveOutcome::Aborted);
        }
    }

    let previous = snapshot.bookmarks.insert(entry);
    store.save(&snapshot.bookmarks, &snapshot.settings)?;
    info!("Saved bookmark `{name}`");

    Ok(match previous {
        Some(previous) => SaveOutcome::Replaced { previous },
        None => SaveOutcome::Saved,
    })
}

/// Deletes the bookmark named exactly `name`.
///
/// # Errors
///
/// Returns [`Error::BookmarkNotFound`] for an unknown name, or an error when
/// the store cannot be written.
pub fn delete_bookmark<S: Store>(store: &mut S, name: &str) -> Result<BookmarkEntry> {
    let mut snapshot = store.load();
    let removed = snapshot
        .bookmarks
        .remove(name)
        .ok_or_else(|| Error::BookmarkNotFound(name.to_string()))?;

    store.save(&snapshot.bookmarks, &snapshot.settings)?;
    info!("Deleted bookmark `{name}`");
    Ok(removed)
}

/// Bookmarks whose name contains `pattern`, ignoring case.
#[must_use]
pub fn find_bookmarks<'a>(bookmarks: &'a BookmarkSet, pattern: &str) -> Vec<&'a BookmarkEntry> {
    let pattern = pattern.to_lowercase();
    bookmarks
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&pattern))
        .collect()
}

/// Hands the named bookmark's command to the shell.
///
/// `confirm` is asked first when the `confirm_command_line` setting is on.
///
/// # Errors
///
/// Returns [`Error::BookmarkNotFound`] for an unknown name, or an error when
/// the hand-off file cannot be written.
pub fn use_bookmark<S, F>(
    store: &S,
    name: &str,
    command_path: &str,
    confirm: F,
) -> Result<UseOutcome>
where
    S: Store,
    F: FnOnce(&BookmarkEntry) -> Result<bool>,
{
    let snapshot = store.load();
    let entry = snapshot
        .bookmarks
        .get(name)
        .cloned()
        .ok_or_else(|| Error::BookmarkNotFound(name.to_string()))?;

    if snapshot.settings.confirm_command_line && !confirm(&entry)? {
        return Ok(UseOutcome::Declined(entry));
    }

    handoff::write_command(command_path, &entry.command)?;
    Ok(UseOutcome::HandedOff(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blast_core::settings::Settings;
    use blast_core::store::MemoryStore;
    use std::fs;
    use tempfile::TempDir;

    fn store(pairs: &[(&str, &str)], settings: Settings) -> MemoryStore {
        let bookmarks = pairs
            .iter()
            .map(|(name, command)| BookmarkEntry::new(*name, *command).unwrap())
            .collect();
        MemoryStore::new(bookmarks, settings)
    }

    #[test]
    fn test_save_new_bookmark_does_not_ask() {
        let mut store = store(&[], Settings::default());
        let outcome = save_bookmark(&mut store, "ls", "ls -la", |_| {
            panic!("should not ask for a new name")
        })
        .unwrap();

        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(store.snapshot().bookmarks.get("ls").unwrap().command, "ls -la");
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_save_existing_asks_before_replacing() {
        let mut store = store(&[("ls", "ls")], Settings::default());

        let outcome = save_bookmark(&mut store, "ls", "ls -la", |_| Ok(false)).unwrap();
        assert_eq!(outcome, SaveOutcome::Aborted);
        assert_eq!(store.save_count(), 0);

        let outcome = save_bookmark(&mut store, "ls", "ls -la", |existing| {
            assert_eq!(existing.command, "ls");
            Ok(true)
        })
        .unwrap();
        assert_eq!(
            outcome,
            SaveOutcome::Replaced {
                previous: "ls".to_string()
            }
        );
        assert_eq!(store.snapshot().bookmarks.get("ls").unwrap().command, "ls -la");
    }

    #[test]
    fn test_save_refuses_blast_itself() {
        let mut store = store(&[], Settings::default());
        let result = save_bookmark(&mut store, "loop", "blast use loop", |_| Ok(true));
        assert!(matches!(result, Err(Error::RecursiveBookmark(_))));

        // Only the program name counts, not a prefix of another word
        assert!(save_bookmark(&mut store, "b", "blastoff --now", |_| Ok(true)).is_ok());
    }

    #[test]
    fn test_save_validates_name() {
        let mut store = store(&[], Settings::default());
        let result = save_bookmark(&mut store, "two words", "ls", |_| Ok(true));
        assert!(matches!(result, Err(Error::NameWithWhitespace(_))));
    }

    #[test]
    fn test_delete_bookmark() {
        let mut store = store(&[("a", "1"), ("b", "2")], Settings::default());

        let removed = delete_bookmark(&mut store, "a").unwrap();
        assert_eq!(removed.command, "1");
        assert_eq!(store.snapshot().bookmarks.len(), 1);

        let missing = delete_bookmark(&mut store, "a");
        assert!(matches!(missing, Err(Error::BookmarkNotFound(_))));
    }

    #[test]
    fn test_find_bookmarks_by_substring() {
        let store = store(
            &[("deploy", "1"), ("Redeploy", "2"), ("build", "3")],
            Settings::default(),
        );
        let bookmarks = store.snapshot().bookmarks.clone();

        let names: Vec<&str> = find_bookmarks(&bookmarks, "DEPLOY")
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Redeploy", "deploy"]);
        assert!(find_bookmarks(&bookmarks, "zzz").is_empty());
    }

    #[test]
    fn test_use_bookmark_confirms_when_enabled() {
        let dir = TempDir::new().unwrap();
        let command_path = dir.path().join("command.sh");
        let command_path = command_path.to_str().unwrap();
        let store = store(&[("ls", "ls -la")], Settings::default());

        let outcome = use_bookmark(&store, "ls", command_path, |_| Ok(false)).unwrap();
        assert!(matches!(outcome, UseOutcome::Declined(_)));
        assert!(!std::path::Path::new(command_path).exists());

        let outcome = use_bookmark(&store, "ls", command_path, |_| Ok(true)).unwrap();
        assert!(matches!(outcome, UseOutcome::HandedOff(_)));
        assert_eq!(fs::read_to_string(command_path).unwrap(), "ls -la");
    }

    #[test]
    fn test_use_bookmark_skips_confirmation_when_disabled() {
        let dir = TempDir::new().unwrap();
        let command_path = dir.path().join("command.sh");
        let command_path = command_path.to_str().unwrap();
        let settings = Settings {
            confirm_command_line: false,
            ..Settings::default()
        };
        let store = store(&[("ls", "ls -la")], settings);

        let outcome = use_bookmark(&store, "ls", command_path, |_| {
            panic!("should not ask")
        })
        .unwrap();
        assert!(matches!(outcome, UseOutcome::HandedOff(_)));
    }

    #[test]
    fn test_use_unknown_bookmark() {
        let store = store(&[], Settings::default());
        let result = use_bookmark(&store, "nope", "/unused", |_| Ok(true));
        assert!(matches!(result, Err(Error::BookmarkNotFound(_))));
    }
}
