//! Blast CLI Library
//!
//! This crate provides the command-line interface for blast, a terminal picker
//! for named command bookmarks. It hosts the interactive selection engine, the
//! terminal display and the one-shot actions.
//!
//! # Key Features
//!
//! - **Interactive Picker**: Narrow bookmarks by typing a name prefix, then commit
//! - **Autocompletion**: Tab extends the query up to the next ambiguity
//! - **Delete Mode**: Remove bookmarks by number with a confirmation step
//! - **Settings Mode**: Toggle the display settings, persisted immediately
//! - **One-shot Actions**: Save, delete, show and use bookmarks by name
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`selection`]: State machine, render plan and crossterm display
//! - [`commands`]: Non-interactive actions over the same store
//!
//! # Examples
//!
//! The CLI binary (`blast`) is meant to be called through a shell wrapper that
//! runs whatever command blast hands off:
//!
//! ```bash
//! # Interactive picker
//! blast
//!
//! # Bookmark a command
//! blast save deploy kubectl apply -f prod.yaml
//!
//! # Hand a bookmark's command to the shell directly
//! blast use deploy
//!
//! # List bookmarks containing some text
//! blast show dep
//! ```

pub mod cli_args;
pub mod commands;
pub mod selection;
