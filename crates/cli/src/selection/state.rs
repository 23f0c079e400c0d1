//! The selection state machine.
//!
//! A [`Session`] owns the bookmarks, the settings and the store they came
//! from. Every key is handled to completion, including any persistence, before
//! the next one is accepted.

use log::{debug, info};

use blast_core::bookmarks::BookmarkSet;
use blast_core::error::Result;
use blast_core::matching::{classify, expand, Classification, MatchClass};
use blast_core::pagination::{self, Page};
use blast_core::settings::{SettingKind, Settings};
use blast_core::store::{Snapshot, Store};

use super::input::is_confirmation;
use super::render::{self, RenderPlan};
use super::types::{Key, Mode, SessionState, Transition, Viewport};

pub struct Session<S: Store> {
    store: S,
    bookmarks: BookmarkSet,
    settings: Settings,
    state: SessionState,
    classification: Classification,
}

impl<S: Store> Session<S> {
    /// Loads bookmarks and settings from `store` and starts in Run mode.
    pub fn new(store: S, viewport: Viewport) -> Self {
        let Snapshot {
            bookmarks,
            settings,
        } = store.load();
        let state = SessionState::new(settings.fit_to_width, viewport);

        let mut session = Self {
            store,
            bookmarks,
            settings,
            state,
            classification: Classification::default(),
        };
        session.reclassify();
        session
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.state.query
    }

    #[must_use]
    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Data rows that fit on one page with the current layout.
    #[must_use]
    pub fn rows_per_page(&self) -> usize {
        let overhead = render::header_footer_overhead(&self.settings, self.state.mode);
        pagination::rows_per_page(self.state.viewport.height, overhead)
    }

    /// The current page of visible bookmarks.
    #[must_use]
    pub fn page(&self) -> Page<'_> {
        pagination::paginate(
            &self.bookmarks,
            &self.classification,
            &self.state.query,
            self.rows_per_page(),
            self.state.current_page,
        )
    }

    #[must_use]
    pub fn render_plan(&self) -> RenderPlan {
        render::build(
            &self.bookmarks,
            &self.classification,
            &self.page(),
            &self.state,
            &self.settings,
        )
    }

    /// Records new terminal dimensions. The query and mode are kept; paging
    /// starts over from the first page.
    pub fn resize(&mut self, viewport: Viewport) -> Transition {
        debug!("Resized to {}x{}", viewport.width, viewport.height);
        self.state.viewport = viewport;
        self.state.current_page = 1;
        Transition::Redraw
    }

    /// Feeds one key press through the state machine.
    ///
    /// # Errors
    ///
    /// Returns an error if a deletion or settings change cannot be persisted.
    pub fn handle_key(&mut self, key: Key) -> Result<Transition> {
        match key {
            Key::Ctrl('c') => return Ok(Transition::Interrupted),
            Key::Ctrl('d') => {
                let next = if self.state.mode.is_deleting() {
                    Mode::Run
                } else {
                    Mode::Delete
                };
                self.set_mode(next);
                return Ok(Transition::Redraw);
            }
            Key::Ctrl('f') => {
                self.state.fit_to_width = !self.state.fit_to_width;
                return Ok(Transition::Redraw);
            }
            Key::Ctrl('s') => {
                if self.state.mode == Mode::Settings {
                    return Ok(Transition::Ignored);
                }
                self.set_mode(Mode::Settings);
                return Ok(Transition::Redraw);
            }
            _ => {}
        }

        match self.state.mode {
            Mode::Run => Ok(self.handle_run_key(key)),
            Mode::Delete => Ok(self.handle_delete_key(key)),
            Mode::ConfirmDelete { position } => self.handle_confirm_delete_key(key, position),
            Mode::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_run_key(&mut self, key: Key) -> Transition {
        match key {
            Key::Char(c) => {
                self.state.query.push(c);
                self.query_changed()
            }
            Key::Backspace => match self.state.query.pop() {
                Some(_) => self.query_changed(),
                None => Transition::Ignored,
            },
            Key::Tab => {
                let expanded = expand(&self.bookmarks, &self.state.query);
                if expanded == self.state.query {
                    return Transition::Ignored;
                }
                self.state.query = expanded;
                self.query_changed()
            }
            Key::Enter => match self.classification.single_exact() {
                Some(name) => match self.bookmarks.get(name) {
                    Some(entry) => {
                        info!("Committing bookmark `{}`", entry.name);
                        Transition::Committed(entry.clone())
                    }
                    None => Transition::Ignored,
                },
                None => Transition::Ignored,
            },
            Key::Up => self.move_page(pagination::previous_page),
            Key::Down => self.move_page(pagination::next_page),
            Key::Esc => Transition::Interrupted,
            Key::Ctrl(_) => Transition::Ignored,
        }
    }

    fn handle_delete_key(&mut self, key: Key) -> Transition {
        match key {
            Key::Char(c) if c.is_ascii_digit() => {
                self.state.query.push(c);
                Transition::Redraw
            }
            Key::Backspace => match self.state.query.pop() {
                Some(_) => Transition::Redraw,
                None => Transition::Ignored,
            },
            Key::Enter => match self.state.query.parse::<usize>() {
                Ok(position) if (1..=self.bookmarks.len()).contains(&position) => {
                    self.set_mode(Mode::ConfirmDelete { position });
                    Transition::Redraw
                }
                _ => Transition::Ignored,
            },
            Key::Esc => {
                self.set_mode(Mode::Run);
                Transition::Redraw
            }
            Key::Up => self.move_page(pagination::previous_page),
            Key::Down => self.move_page(pagination::next_page),
            Key::Char(_) | Key::Ctrl(_) | Key::Tab => Transition::Ignored,
        }
    }

    fn handle_confirm_delete_key(&mut self, key: Key, position: usize) -> Result<Transition> {
        match key {
            Key::Char(c) => {
                self.state.query.push(c);
                Ok(Transition::Redraw)
            }
            Key::Backspace => match self.state.query.pop() {
                Some(_) => Ok(Transition::Redraw),
                None => Ok(Transition::Ignored),
            },
            Key::Enter => {
                let confirmed = is_confirmation(&self.state.query);
                self.set_mode(Mode::Delete);

                if !confirmed {
                    return Ok(Transition::Redraw);
                }

                let Some(removed) = self.bookmarks.remove_at(position) else {
                    return Ok(Transition::Redraw);
                };
                self.store.save(&self.bookmarks, &self.settings)?;
                self.reclassify();
                info!("Deleted bookmark `{}`", removed.name);
                Ok(Transition::Deleted(removed))
            }
            Key::Esc => {
                self.set_mode(Mode::Run);
                Ok(Transition::Redraw)
            }
            Key::Tab | Key::Up | Key::Down | Key::Ctrl(_) => Ok(Transition::Ignored),
        }
    }

    fn handle_settings_key(&mut self, key: Key) -> Result<Transition> {
        match key {
            Key::Char(c) => {
                let Some(kind) = SettingKind::from_digit(c) else {
                    return Ok(Transition::Ignored);
                };
                let enabled = self.settings.toggle(kind);
                if kind == SettingKind::FitToWidth {
                    self.state.fit_to_width = enabled;
                }
                self.store.save(&self.bookmarks, &self.settings)?;
                // Logo and usage lines change how many rows fit
                self.state.current_page = 1;
                debug!("Toggled {kind:?} to {enabled}");
                Ok(Transition::SettingToggled { kind, enabled })
            }
            Key::Esc => {
                self.set_mode(Mode::Run);
                Ok(Transition::Redraw)
            }
            _ => Ok(Transition::Ignored),
        }
    }

    fn move_page(&mut self, step: fn(usize, usize) -> usize) -> Transition {
        let page = self.page();
        let target = step(page.current_page, page.page_count);
        if target == self.state.current_page {
            return Transition::Ignored;
        }
        self.state.current_page = target;
        Transition::Redraw
    }

    fn query_changed(&mut self) -> Transition {
        self.state.current_page = 1;
        self.reclassify();
        Transition::Redraw
    }

    /// Leaving or entering a mode always starts from an empty query on the
    /// first page.
    fn set_mode(&mut self, mode: Mode) {
        self.state.mode = mode;
        self.state.query.clear();
        self.state.current_page = 1;
        self.reclassify();
    }

    fn reclassify(&mut self) {
        self.classification = if self.state.mode.is_deleting() {
            Classification::uniform(&self.bookmarks, MatchClass::PrefixMatch)
        } else {
            classify(&self.bookmarks, &self.state.query)
        };
    }
}
