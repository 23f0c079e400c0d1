//! Persistence of bookmarks and settings.
//!
//! The interactive session only ever sees the [`Store`] trait. [`FileStore`]
//! keeps everything in one YAML file and regenerates the shell-completion
//! word list on every save; [`MemoryStore`] keeps the last snapshot in memory.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::bookmarks::{BookmarkEntry, BookmarkSet};
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Everything a store hands back on load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub bookmarks: BookmarkSet,
    pub settings: Settings,
}

/// Load/save contract consumed by the interactive session and the one-shot
/// actions.
pub trait Store {
    /// Reads the persisted state.
    ///
    /// Missing or malformed data is never an error: it yields an empty
    /// bookmark set and default settings.
    fn load(&self) -> Snapshot;

    /// Persists the bookmarks (sorted by name) and settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be written.
    fn save(&mut self, bookmarks: &BookmarkSet, settings: &Settings) -> Result<()>;
}

/// On-disk layout of the bookmarks file.
#[derive(Deserialize, Serialize, Debug, Default)]
struct PersistedState {
    #[serde(default)]
    settings: Settings,
    #[serde(default)]
    bookmarks: BTreeMap<String, String>,
}

impl PersistedState {
    fn into_snapshot(self, path: &str) -> Snapshot {
        let bookmarks = self
            .bookmarks
            .into_iter()
            .filter_map(|(name, command)| match BookmarkEntry::new(name, command) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping invalid bookmark in `{path}`: {e}");
                    None
                }
            })
            .collect();

        Snapshot {
            bookmarks,
            settings: self.settings,
        }
    }
}

/// YAML file backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    bookmarks_path: String,
    completions_path: String,
}

impl FileStore {
    #[must_use]
    pub fn new(bookmarks_path: String, completions_path: String) -> Self {
        Self {
            bookmarks_path,
            completions_path,
        }
    }

    #[must_use]
    pub fn bookmarks_path(&self) -> &str {
        &self.bookmarks_path
    }

    #[must_use]
    pub fn completions_path(&self) -> &str {
        &self.completions_path
    }

    fn read_state(&self) -> Result<Option<PersistedState>> {
        let path = &self.bookmarks_path;
        if !Path::new(path).exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| Error::io_error("bookmarks".to_string(), path.clone(), e))?;

        if contents.trim().is_empty() {
            return Ok(None);
        }

        serde_yaml::from_str(&contents)
            .map(Some)
            .map_err(|e| {
                Error::yaml_error(
                    "reading".to_string(),
                    "bookmarks".to_string(),
                    path.clone(),
                    e,
                )
            })
    }
}

impl Store for FileStore {
    fn load(&self) -> Snapshot {
        match self.read_state() {
            Ok(Some(state)) => {
                let snapshot = state.into_snapshot(&self.bookmarks_path);
                debug!(
                    "Loaded {} bookmarks from `{}`",
                    snapshot.bookmarks.len(),
                    self.bookmarks_path
                );
                snapshot
            }
            Ok(None) => {
                info!(
                    "No bookmarks found at `{}`, starting empty",
                    self.bookmarks_path
                );
                Snapshot::default()
            }
            Err(e) => {
                warn!("{e}. Falling back to an empty bookmark set and default settings");
                Snapshot::default()
            }
        }
    }

    fn save(&mut self, bookmarks: &BookmarkSet, settings: &Settings) -> Result<()> {
        let state = PersistedState {
            settings: *settings,
            bookmarks: bookmarks
                .iter()
                .map(|entry| (entry.name.clone(), entry.command.clone()))
                .collect(),
        };

        let contents = serde_yaml::to_string(&state).map_err(|e| {
            Error::yaml_error(
                "writing".to_string(),
                "bookmarks".to_string(),
                self.bookmarks_path.clone(),
                e,
            )
        })?;

        write_atomically("bookmarks", &self.bookmarks_path, &contents)?;
        write_atomically(
            "completions",
            &self.completions_path,
            &completion_words(bookmarks),
        )?;

        debug!(
            "Saved {} bookmarks to `{}`",
            bookmarks.len(),
            self.bookmarks_path
        );
        Ok(())
    }
}

/// Names joined by single spaces, the format the shell completion reads.
#[must_use]
pub fn completion_words(bookmarks: &BookmarkSet) -> String {
    bookmarks.names().join(" ")
}

/// Replaces the file at `path` so readers see either the old or the new
/// contents, never a partial write.
pub(crate) fn write_atomically(file_description: &str, path: &str, contents: &str) -> Result<()> {
    let io_error =
        |e: std::io::Error| Error::io_error(file_description.to_string(), path.to_string(), e);

    let parent = match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_error)?;

    let mut file = NamedTempFile::new_in(parent).map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;

    Ok(())
}

/// In-memory store, mostly useful for driving a session in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Snapshot,
    save_count: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new(bookmarks: BookmarkSet, settings: Settings) -> Self {
        Self {
            snapshot: Snapshot {
                bookmarks,
                settings,
            },
            save_count: 0,
        }
    }

    /// The most recently saved (or initial) state.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Snapshot {
        self.snapshot.clone()
    }

    fn save(&mut self, bookmarks: &BookmarkSet, settings: &Settings) -> Result<()> {
        self.snapshot = Snapshot {
            bookmarks: bookmarks.clone(),
            settings: *settings,
        };
        self.save_count += 1;
        Ok(())
    }
}
