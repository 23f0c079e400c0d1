//! Type definitions for the interactive picker.
//!
//! This module defines the keys the picker reacts to, the modes of the
//! selection state machine and the per-session state.

use blast_core::bookmarks::BookmarkEntry;
use blast_core::settings::SettingKind;

/// A key press, independent of the terminal library that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// A character typed with Control held, always lowercase
    Ctrl(char),
    Backspace,
    Tab,
    Enter,
    Esc,
    Up,
    Down,
}

/// Mode of the selection state machine.
///
/// Only [`Mode::ConfirmDelete`] carries data: the 1-based position of the
/// bookmark awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Run,
    Delete,
    ConfirmDelete { position: usize },
    Settings,
}

impl Mode {
    /// Whether the table is being browsed for deletion.
    #[must_use]
    pub fn is_deleting(self) -> bool {
        matches!(self, Mode::Delete | Mode::ConfirmDelete { .. })
    }
}

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// State for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub query: String,
    pub mode: Mode,
    /// 1-based
    pub current_page: usize,
    pub fit_to_width: bool,
    pub viewport: Viewport,
}

impl SessionState {
    #[must_use]
    pub fn new(fit_to_width: bool, viewport: Viewport) -> Self {
        Self {
            query: String::new(),
            mode: Mode::Run,
            current_page: 1,
            fit_to_width,
            viewport,
        }
    }
}

/// What handling one event amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    /// State changed and the screen should be redrawn
    Redraw,
    /// The bookmark was chosen; the session is over
    Committed(BookmarkEntry),
    /// The bookmark was deleted and the set persisted
    Deleted(BookmarkEntry),
    /// A setting was flipped and persisted
    SettingToggled { kind: SettingKind, enabled: bool },
    /// The user asked to leave without choosing anything
    Interrupted,
}

impl Transition {
    /// Whether the session ends with this transition.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Transition::Committed(_) | Transition::Interrupted)
    }
}
