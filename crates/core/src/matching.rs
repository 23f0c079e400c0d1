//! Prefix matching and autocompletion of bookmark names.
//!
//! Matching is case-insensitive and prefix-only. Both [`classify`] and
//! [`expand`] depend on nothing but their arguments, so callers recompute
//! them from scratch after every query change.

use indexmap::{IndexMap, IndexSet};

use crate::bookmarks::BookmarkSet;

/// How a bookmark name relates to the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchClass {
    NoMatch = 0,
    PrefixMatch = 1,
    ExactMatch = 2,
}

/// Match class of every bookmark, in the set's stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    classes: IndexMap<String, MatchClass>,
}

impl Classification {
    /// Every entry marked with the same class.
    #[must_use]
    pub fn uniform(bookmarks: &BookmarkSet, class: MatchClass) -> Self {
        Self {
            classes: bookmarks
                .names()
                .map(|name| (name.to_string(), class))
                .collect(),
        }
    }

    #[must_use]
    pub fn class_of(&self, name: &str) -> MatchClass {
        self.classes
            .get(name)
            .copied()
            .unwrap_or(MatchClass::NoMatch)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MatchClass)> {
        self.classes
            .iter()
            .map(|(name, class)| (name.as_str(), *class))
    }

    /// Names carrying the given class, in stable order.
    pub fn names_with(&self, class: MatchClass) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(move |(_, candidate)| *candidate == class)
            .map(|(name, _)| name)
    }

    /// The only exact match, if there is exactly one.
    #[must_use]
    pub fn single_exact(&self) -> Option<&str> {
        let mut exact = self.names_with(MatchClass::ExactMatch);
        match (exact.next(), exact.next()) {
            (Some(name), None) => Some(name),
            _ => None,
        }
    }

    /// Number of entries that are a prefix or exact match.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.classes
            .values()
            .filter(|class| **class != MatchClass::NoMatch)
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Classifies every bookmark against `query`.
///
/// The empty query highlights nothing: every entry is [`MatchClass::NoMatch`].
#[must_use]
pub fn classify(bookmarks: &BookmarkSet, query: &str) -> Classification {
    if query.is_empty() {
        return Classification::uniform(bookmarks, MatchClass::NoMatch);
    }

    let query = query.to_lowercase();
    let classes = bookmarks
        .names()
        .map(|name| {
            let name_lower = name.to_lowercase();
            let class = if name_lower == query {
                MatchClass::ExactMatch
            } else if name_lower.starts_with(&query) {
                MatchClass::PrefixMatch
            } else {
                MatchClass::NoMatch
            };
            (name.to_string(), class)
        })
        .collect();

    Classification { classes }
}

/// Extends `query` for as long as every candidate agrees on the next character.
///
/// A candidate the query already covers in full contributes no character, so
/// expansion only stops at a branch point, when every candidate has ended, or
/// when nothing matches. Each appended character is taken from a candidate
/// name, so a query that had matches keeps having matches.
#[must_use]
pub fn expand(bookmarks: &BookmarkSet, query: &str) -> String {
    let mut expanded = query.to_string();

    loop {
        let expanded_lower = expanded.to_lowercase();

        let candidates: Vec<&str> = bookmarks
            .names()
            .filter(|name| name.to_lowercase().starts_with(&expanded_lower))
            .collect();

        if candidates.is_empty() {
            return expanded;
        }

        let next_characters: IndexSet<char> = candidates
            .iter()
            .filter_map(|name| next_character(name, &expanded_lower))
            .collect();

        if next_characters.len() != 1 {
            return expanded;
        }

        expanded.extend(next_characters);
    }
}

/// The character of `name` following the part that lowercases to
/// `query_lower`.
///
/// Lowercasing can turn one character into several, so positions are found
/// by lowercasing `name` one character at a time. `None` when the name ends
/// there, or when the query stops partway through one character's lowercase
/// form.
fn next_character(name: &str, query_lower: &str) -> Option<char> {
    let mut consumed = String::new();
    let mut chars = name.chars();

    while consumed.len() < query_lower.len() {
        consumed.extend(chars.next()?.to_lowercase());
    }

    if consumed == query_lower {
        chars.next()
    } else {
        None
    }
}
