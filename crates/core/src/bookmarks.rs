//! The bookmark data model.
//!
//! A [`BookmarkSet`] keeps its entries sorted by name (case-sensitive,
//! lexical) with unique names. Positions handed out to the user are 1-based
//! indexes into that stable order.

use std::fmt::{Display, Formatter};

use crate::error::Error::{EmptyCommand, EmptyName, NameWithWhitespace};
use crate::error::Result;

/// A named alias for a shell command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEntry {
    pub name: String,
    pub command: String,
}

impl BookmarkEntry {
    /// Builds a validated entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains whitespace, or if the
    /// command is empty.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let command = command.into();

        validate_name(&name)?;

        if command.trim().is_empty() {
            return Err(EmptyCommand(name));
        }

        Ok(Self { name, command })
    }
}

impl Display for BookmarkEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.name, self.command)
    }
}

/// Checks that a name can be used as a bookmark key.
///
/// Names end up space-joined in the completion word list, so whitespace is
/// rejected along with the empty name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EmptyName);
    }

    if name.chars().any(char::is_whitespace) {
        return Err(NameWithWhitespace(name.to_string()));
    }

    Ok(())
}

/// Ordered, name-unique collection of bookmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    entries: Vec<BookmarkEntry>,
}

impl BookmarkSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the command stored under `entry.name`.
    ///
    /// Returns the command previously stored under that name, if any.
    pub fn insert(&mut self, entry: BookmarkEntry) -> Option<String> {
        match self
            .entries
            .binary_search_by(|existing| existing.name.as_str().cmp(entry.name.as_str()))
        {
            Ok(index) => Some(std::mem::replace(
                &mut self.entries[index].command,
                entry.command,
            )),
            Err(index) => {
                self.entries.insert(index, entry);
                None
            }
        }
    }

    /// Removes the entry with exactly this name.
    pub fn remove(&mut self, name: &str) -> Option<BookmarkEntry> {
        let index = self.index_of(name)?;
        Some(self.entries.remove(index))
    }

    /// Removes the entry at a 1-based position in the stable order.
    pub fn remove_at(&mut self, position: usize) -> Option<BookmarkEntry> {
        if position == 0 || position > self.entries.len() {
            return None;
        }

        Some(self.entries.remove(position - 1))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BookmarkEntry> {
        self.index_of(name).map(|index| &self.entries[index])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Entry at a 1-based position in the stable order.
    #[must_use]
    pub fn entry_at(&self, position: usize) -> Option<&BookmarkEntry> {
        position
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
    }

    /// 1-based position of the entry with this name.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.index_of(name).map(|index| index + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookmarkEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Width in characters of the longest name, 0 when empty.
    #[must_use]
    pub fn longest_name_width(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.name.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries
            .binary_search_by(|existing| existing.name.as_str().cmp(name))
            .ok()
    }
}

impl FromIterator<BookmarkEntry> for BookmarkSet {
    /// Later entries win when names repeat.
    fn from_iter<T: IntoIterator<Item = BookmarkEntry>>(iter: T) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn entry(name: &str, command: &str) -> BookmarkEntry {
        BookmarkEntry::new(name, command).unwrap()
    }

    #[test]
    fn test_entries_are_sorted_case_sensitively() {
        let set: BookmarkSet = vec![
            entry("deploy", "kubectl apply"),
            entry("Build", "cargo build"),
            entry("alpha", "echo a"),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = set.names().collect();
        // Uppercase sorts before lowercase in byte order
        assert_eq!(names, vec!["Build", "alpha", "deploy"]);
    }

    #[test]
    fn test_insert_replaces_existing_name() {
        let mut set = BookmarkSet::new();
        assert_eq!(set.insert(entry("ls", "ls -la")), None);
        assert_eq!(set.insert(entry("ls", "ls -lah")), Some("ls -la".to_string()));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("ls").unwrap().command, "ls -lah");
    }

    #[test]
    fn test_positions_are_one_based() {
        let set: BookmarkSet = vec![entry("a", "1"), entry("b", "2"), entry("c", "3")]
            .into_iter()
            .collect();

        assert_eq!(set.entry_at(1).unwrap().name, "a");
        assert_eq!(set.entry_at(3).unwrap().name, "c");
        assert!(set.entry_at(0).is_none());
        assert!(set.entry_at(4).is_none());
        assert_eq!(set.position_of("b"), Some(2));
        assert_eq!(set.position_of("B"), None);
    }

    #[test]
    fn test_remove_at_removes_exactly_that_entry() {
        let mut set: BookmarkSet = vec![entry("a", "1"), entry("b", "2"), entry("c", "3")]
            .into_iter()
            .collect();

        let removed = set.remove_at(2).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(set.len(), 2);
        assert!(!set.contains("b"));
        assert!(set.remove_at(0).is_none());
        assert!(set.remove_at(3).is_none());
    }

    #[test]
    fn test_remove_by_name() {
        let mut set: BookmarkSet = vec![entry("a", "1")].into_iter().collect();
        assert!(set.remove("A").is_none());
        assert_eq!(set.remove("a").unwrap().command, "1");
        assert!(set.is_empty());
    }

    #[test]
    fn test_longest_name_width() {
        let set: BookmarkSet = vec![entry("short", "1"), entry("much-longer", "2")]
            .into_iter()
            .collect();
        assert_eq!(set.longest_name_width(), 11);
        assert_eq!(BookmarkSet::new().longest_name_width(), 0);
    }

    #[test]
    fn test_entry_validation() {
        assert!(matches!(BookmarkEntry::new("", "ls"), Err(Error::EmptyName)));
        assert!(matches!(
            BookmarkEntry::new("two words", "ls"),
            Err(Error::NameWithWhitespace(_))
        ));
        assert!(matches!(
            BookmarkEntry::new("ls", "   "),
            Err(Error::EmptyCommand(_))
        ));
        assert!(BookmarkEntry::new("my-ls", "ls -la").is_ok());
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(format!("{}", entry("ls", "ls -la")), "ls: ls -la");
    }
}
